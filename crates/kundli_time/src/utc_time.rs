//! UTC calendar instant built from a birth date and time of day.
//!
//! `UtcTime` is a plain value type: no time zone state, no clock access.
//! Date and time strings are taken as UTC.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TimeError;
use crate::julian::julian_day;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Parse a `YYYY-MM-DD` date and an `HH:MM` (or `HH:MM:SS`) time.
    ///
    /// Surrounding whitespace is ignored. Calendar-invalid dates such as
    /// `2023-02-29` are rejected.
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        let date = parse_date(date)?;
        let time = parse_time(time)?;
        Ok(Self::from(NaiveDateTime::new(date, time)))
    }

    /// Julian Day of this instant.
    pub fn to_jd(&self) -> f64 {
        julian_day(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// The date part as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// The time part as `HH:MM` (seconds appended only when non-zero).
    pub fn time_string(&self) -> String {
        if self.second.abs() < 1e-9 {
            format!("{:02}:{:02}", self.hour, self.minute)
        } else {
            format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second as u32)
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(s.to_string()))
}

fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| TimeError::InvalidTime(s.to_string()))
}

impl From<NaiveDateTime> for UtcTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
