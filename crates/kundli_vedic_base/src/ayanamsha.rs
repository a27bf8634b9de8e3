//! Lahiri ayanamsha, linear approximation.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed stars).
//! It grows as the equinox precesses westward.
//!
//! This is a linear model: a reference value at JD 2435553.5 (1956-Mar-21 0h)
//! advanced at a constant 50.288"/yr. It is not the full Lahiri series and
//! drifts from published tables by a few arcminutes per century.

use kundli_time::DAYS_PER_YEAR;

use crate::util::normalize_360;

/// Reference epoch of the linear Lahiri model.
pub const LAHIRI_REFERENCE_JD: f64 = 2_435_553.5;

/// Lahiri ayanamsha at [`LAHIRI_REFERENCE_JD`], in degrees.
pub const LAHIRI_REFERENCE_DEG: f64 = 23.15;

/// General precession rate in arcseconds per Julian year.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.288;

/// Lahiri ayanamsha in degrees at a Julian Day.
///
/// `ayanamsha = 23.15 + 50.288 * years / 3600`, with
/// `years = (jd - 2435553.5) / 365.25`.
pub fn ayanamsha_deg(jd: f64) -> f64 {
    let years = (jd - LAHIRI_REFERENCE_JD) / DAYS_PER_YEAR;
    LAHIRI_REFERENCE_DEG + (PRECESSION_ARCSEC_PER_YEAR * years) / 3600.0
}

/// Sidereal longitude from a tropical longitude and an ayanamsha, in [0, 360).
pub fn sidereal_longitude(tropical_deg: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsha_deg + 360.0)
}
