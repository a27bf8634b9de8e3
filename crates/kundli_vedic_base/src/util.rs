//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// Values that round up to exactly 360.0 (tiny negative inputs) map to 0.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
