//! Resolved birth location.

use serde::Serialize;

use crate::error::GeoError;

/// Geographic coordinates in degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    lat: f64,
    lng: f64,
}

impl GeoCoordinate {
    /// Create a validated coordinate.
    ///
    /// Returns `Err(GeoError::InvalidCoordinate)` unless `lat ∈ [-90, 90]`
    /// and `lng ∈ [-180, 180]`.
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees, [-90, 90].
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees east, [-180, 180].
    pub fn lng(&self) -> f64 {
        self.lng
    }
}
