//! Error types for Vedic chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundli_time::TimeError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from date/time parsing.
    Time(TimeError),
    /// Angle was NaN or infinite.
    InvalidLongitude(f64),
    /// No nakshatra segment contains the (normalized) longitude.
    NoNakshatra(f64),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLongitude(lon) => write!(f, "invalid longitude: {lon}"),
            Self::NoNakshatra(lon) => {
                write!(f, "no nakshatra segment contains longitude {lon} deg")
            }
        }
    }
}

impl Error for VedicError {}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
