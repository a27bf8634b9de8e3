//! Chart result types, serialized as the engine's success body.

use kundli_geo::GeoCoordinate;
use kundli_vedic_base::{Bhava, Dms, NakshatraInfo, RashiInfo};
use serde::Serialize;

/// Fixed notice attached to every chart.
pub const DISCLAIMER: &str = "This birth chart is generated with simplified astronomical \
formulas (low-precision solar position, linear Lahiri ayanamsa, simplified ascendant) and \
is intended for general guidance only. Consult a qualified astrologer for detailed analysis.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KundliResult {
    pub personal_info: PersonalInfo,
    pub ascendant: ZodiacPosition,
    pub sun_position: SunPosition,
    pub houses: Vec<HouseEntry>,
    /// Lahiri ayanamsa in degrees.
    pub ayanamsa: f64,
    pub disclaimer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub date_of_birth: String,
    pub time_of_birth: String,
    pub place_of_birth: String,
    pub gender: String,
    pub coordinates: GeoCoordinate,
    pub julian_day: f64,
}

/// A longitude with its sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZodiacPosition {
    /// Ecliptic longitude, [0, 360).
    pub longitude: f64,
    /// English sign name (Aries..Pisces).
    pub sign: &'static str,
    /// Sanskrit rashi name (Mesha..Meena).
    pub rashi: &'static str,
    /// Degrees within the sign, [0, 30).
    pub degree: f64,
    pub dms: DmsView,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DmsView {
    pub degrees: u64,
    pub minutes: u8,
    pub seconds: f64,
}

impl From<Dms> for DmsView {
    fn from(d: Dms) -> Self {
        Self {
            degrees: d.degrees,
            minutes: d.minutes,
            seconds: d.seconds,
        }
    }
}

impl From<&RashiInfo> for ZodiacPosition {
    fn from(info: &RashiInfo) -> Self {
        Self {
            longitude: info.longitude_deg,
            sign: info.rashi.western_name(),
            rashi: info.rashi.name(),
            degree: info.degrees_in_rashi,
            dms: info.dms.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunPosition {
    pub tropical: ZodiacPosition,
    pub sidereal: SiderealPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiderealPosition {
    #[serde(flatten)]
    pub position: ZodiacPosition,
    pub nakshatra: NakshatraView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraView {
    pub name: &'static str,
    pub index: u8,
    /// Ruling graha (English name).
    pub ruler: &'static str,
    /// Quarter, 1-4.
    pub pada: u8,
}

impl From<&NakshatraInfo> for NakshatraView {
    fn from(info: &NakshatraInfo) -> Self {
        Self {
            name: info.nakshatra.name(),
            index: info.nakshatra_index,
            ruler: info.lord.english_name(),
            pada: info.pada,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseEntry {
    /// House number, 1-12.
    pub house: u8,
    pub sign: &'static str,
    pub rashi: &'static str,
    pub degree: f64,
    pub dms: DmsView,
    pub name: String,
}

impl From<&Bhava> for HouseEntry {
    fn from(b: &Bhava) -> Self {
        Self {
            house: b.number,
            sign: b.rashi.rashi.western_name(),
            rashi: b.rashi.rashi.name(),
            degree: b.rashi.degrees_in_rashi,
            dms: b.rashi.dms.into(),
            name: b.name().into_owned(),
        }
    }
}
