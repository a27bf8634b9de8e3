//! Julian Day from a civil UTC calendar instant.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7. Gregorian calendar
//! only; no leap-second or TT/TDB corrections are applied, the chart pipeline
//! works directly in UTC Julian Days.

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00:00 UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days in a Julian year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Julian Day for a calendar date with a fractional day.
///
/// `day_frac` is the day of month plus the fraction of the day elapsed,
/// e.g. `1.5` for the 1st at 12:00.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Day for a full civil instant.
///
/// The whole-day part and the time-of-day fraction are summed separately so
/// that J2000.0 comes out as exactly `2451545.0`.
pub fn julian_day(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> f64 {
    let day_fraction = (hour as f64 + minute as f64 / 60.0 + second / 3600.0) / 24.0;
    calendar_to_jd(year, month, day as f64) + day_fraction
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
