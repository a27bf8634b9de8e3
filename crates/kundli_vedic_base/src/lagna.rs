//! Lagna (Ascendant), simplified linear model.
//!
//! `Asc = (RAMC + latitude) mod 360`, where RAMC = LST × 15.
//!
//! This is NOT the spherical-astronomy ascendant. The standard relation is
//! `Asc = atan2(-cos(LST), sin(LST)·cos(ε) + tan(φ)·sin(ε))` with ε the
//! obliquity of the ecliptic (Meeus ch. 13). Known simplification: swapping
//! models moves the lagna and every house derived from it.

use kundli_time::{gst_hours, local_sidereal_time_hours};

use crate::util::normalize_360;

/// Right ascension of the meridian (RAMC) in degrees, [0, 360).
///
/// RAMC = LST × 15, with LST from GST and the observer's east longitude.
pub fn ramc_deg(jd: f64, longitude_east_deg: f64) -> f64 {
    let lst = local_sidereal_time_hours(gst_hours(jd), longitude_east_deg);
    normalize_360(lst * 15.0)
}

/// Ecliptic longitude of the lagna in degrees, [0, 360).
pub fn lagna_longitude_deg(jd: f64, latitude_deg: f64, longitude_east_deg: f64) -> f64 {
    lagna_from_ramc(ramc_deg(jd, longitude_east_deg), latitude_deg)
}

/// Lagna from a precomputed RAMC.
pub fn lagna_from_ramc(ramc_deg: f64, latitude_deg: f64) -> f64 {
    normalize_360(ramc_deg + latitude_deg)
}
