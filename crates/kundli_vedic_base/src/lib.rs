//! Vedic birth-chart primitives built on Julian Day inputs.
//!
//! This crate provides:
//! - Lahiri ayanamsha (linear approximation)
//! - Apparent solar longitude (low-precision series)
//! - Lagna (simplified linear ascendant) and equal bhavas
//! - Rashi, DMS and 27-nakshatra lookup
//!
//! Everything here is a pure function of its arguments.

pub mod ayanamsha;
pub mod bhava;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod solar;
pub mod util;

pub use ayanamsha::{ayanamsha_deg, sidereal_longitude};
pub use bhava::{BHAVA_NAMES, Bhava, bhava_name, equal_bhavas};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use lagna::{lagna_from_ramc, lagna_longitude_deg, ramc_deg};
pub use nakshatra::{
    NAKSHATRA_SPAN_27, NAKSHATRA_TABLE, Nakshatra, NakshatraInfo, NakshatraSegment, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude};
pub use solar::{SolarElements, solar_elements, sun_tropical_longitude_deg};
pub use util::normalize_360;
