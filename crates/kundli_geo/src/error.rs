//! Failures of a place lookup.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("place not found: {place}")]
    NotFound { place: String },

    #[error("geocoding request for '{place}' timed out")]
    Timeout { place: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("geocoder returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid geocoder response: {0}")]
    InvalidResponse(String),

    #[error("coordinate out of range: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },
}

impl GeoError {
    /// True when the geocoder answered normally but had no match.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
