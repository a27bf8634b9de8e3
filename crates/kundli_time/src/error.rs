//! Error types for civil date/time parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing a birth date or time.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Time is not a valid `HH:MM` or `HH:MM:SS` time of day.
    InvalidTime(String),
}

impl TimeError {
    /// Name of the request field the error refers to.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidDate(_) => "dob",
            Self::InvalidTime(_) => "tob",
        }
    }
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date '{s}', expected YYYY-MM-DD"),
            Self::InvalidTime(s) => write!(f, "invalid time '{s}', expected HH:MM"),
        }
    }
}

impl Error for TimeError {}
