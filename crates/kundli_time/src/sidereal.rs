//! Greenwich and local sidereal time, in hours.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4. The input is
//! a UTC Julian Day used in place of UT1 (sub-second difference ignored).

use crate::julian::{J2000_JD, jd_to_centuries};

/// Hours in one sidereal day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Greenwich mean sidereal time in hours, range [0, 24).
///
/// θ = 280.46061837 + 360.98564736629·(JD − 2451545.0) + T²·(0.000387933 − T/38710000)
pub fn gst_hours(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let theta = 280.460_618_37
        + 360.985_647_366_29 * (jd - J2000_JD)
        + t * t * (0.000_387_933 - t / 38_710_000.0);
    theta.rem_euclid(360.0) / 15.0
}

/// Local sidereal time in hours from GST and east longitude in degrees.
///
/// Returns a value in [0, 24).
pub fn local_sidereal_time_hours(gst_hours: f64, longitude_east_deg: f64) -> f64 {
    let lst = (gst_hours + longitude_east_deg / 15.0).rem_euclid(HOURS_PER_DAY);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if lst >= HOURS_PER_DAY { 0.0 } else { lst }
}
