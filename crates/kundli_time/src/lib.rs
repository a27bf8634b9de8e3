//! Civil time to astronomical time for birth-chart computation.
//!
//! This crate provides:
//! - Julian Day from a UTC calendar instant
//! - Greenwich and local sidereal time
//! - `UtcTime`, parsed from `YYYY-MM-DD` / `HH:MM` birth strings

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, DAYS_PER_YEAR, J2000_JD, calendar_to_jd, jd_to_centuries, julian_day,
};
pub use sidereal::{gst_hours, local_sidereal_time_hours};
pub use utc_time::UtcTime;
