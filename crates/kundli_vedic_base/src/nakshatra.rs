//! Nakshatra (lunar mansion) lookup, 27-fold scheme.
//!
//! The ecliptic circle is divided into 27 nakshatras of 13 deg 20'
//! (13.333333 deg) each, in a fixed table whose boundaries are rounded to
//! six decimals. Consecutive segments share their boundary value, so the
//! table covers [0, 360) without gaps or overlap. A segment contains its
//! lower boundary and excludes its upper one.
//!
//! Each nakshatra has 4 padas (quarters) of 3 deg 20' each, and a lord from
//! the Vimshottari sequence (Ketu, Venus, Sun, Moon, Mars, Rahu, Jupiter,
//! Saturn, Mercury, repeated three times).

use crate::error::VedicError;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Nominal span of one nakshatra, 13 deg 20'.
pub const NAKSHATRA_SPAN_27: f64 = 13.333_333;

/// Nominal span of one pada, 3 deg 20'.
pub const PADA_SPAN: f64 = 3.333_333;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// One row of the nakshatra table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraSegment {
    pub nakshatra: Nakshatra,
    /// Inclusive lower boundary, degrees.
    pub start_deg: f64,
    /// Exclusive upper boundary, degrees.
    pub end_deg: f64,
    /// Ruling graha.
    pub lord: Graha,
}

impl NakshatraSegment {
    /// Whether `lon` (already normalized) falls in this segment.
    pub fn contains(&self, lon: f64) -> bool {
        lon >= self.start_deg && lon < self.end_deg
    }
}

const fn seg(nakshatra: Nakshatra, start_deg: f64, end_deg: f64, lord: Graha) -> NakshatraSegment {
    NakshatraSegment {
        nakshatra,
        start_deg,
        end_deg,
        lord,
    }
}

/// The 27 segments in ecliptic order.
pub const NAKSHATRA_TABLE: [NakshatraSegment; 27] = [
    seg(Nakshatra::Ashwini, 0.0, 13.333333, Graha::Ketu),
    seg(Nakshatra::Bharani, 13.333333, 26.666667, Graha::Shukra),
    seg(Nakshatra::Krittika, 26.666667, 40.0, Graha::Surya),
    seg(Nakshatra::Rohini, 40.0, 53.333333, Graha::Chandra),
    seg(Nakshatra::Mrigashira, 53.333333, 66.666667, Graha::Mangal),
    seg(Nakshatra::Ardra, 66.666667, 80.0, Graha::Rahu),
    seg(Nakshatra::Punarvasu, 80.0, 93.333333, Graha::Guru),
    seg(Nakshatra::Pushya, 93.333333, 106.666667, Graha::Shani),
    seg(Nakshatra::Ashlesha, 106.666667, 120.0, Graha::Buddh),
    seg(Nakshatra::Magha, 120.0, 133.333333, Graha::Ketu),
    seg(Nakshatra::PurvaPhalguni, 133.333333, 146.666667, Graha::Shukra),
    seg(Nakshatra::UttaraPhalguni, 146.666667, 160.0, Graha::Surya),
    seg(Nakshatra::Hasta, 160.0, 173.333333, Graha::Chandra),
    seg(Nakshatra::Chitra, 173.333333, 186.666667, Graha::Mangal),
    seg(Nakshatra::Swati, 186.666667, 200.0, Graha::Rahu),
    seg(Nakshatra::Vishakha, 200.0, 213.333333, Graha::Guru),
    seg(Nakshatra::Anuradha, 213.333333, 226.666667, Graha::Shani),
    seg(Nakshatra::Jyeshtha, 226.666667, 240.0, Graha::Buddh),
    seg(Nakshatra::Mula, 240.0, 253.333333, Graha::Ketu),
    seg(Nakshatra::PurvaAshadha, 253.333333, 266.666667, Graha::Shukra),
    seg(Nakshatra::UttaraAshadha, 266.666667, 280.0, Graha::Surya),
    seg(Nakshatra::Shravana, 280.0, 293.333333, Graha::Chandra),
    seg(Nakshatra::Dhanishtha, 293.333333, 306.666667, Graha::Mangal),
    seg(Nakshatra::Shatabhisha, 306.666667, 320.0, Graha::Rahu),
    seg(Nakshatra::PurvaBhadrapada, 320.0, 333.333333, Graha::Guru),
    seg(Nakshatra::UttaraBhadrapada, 333.333333, 346.666667, Graha::Shani),
    seg(Nakshatra::Revati, 346.666667, 360.0, Graha::Buddh),
];

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Ruling graha.
    pub lord: Graha,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra.
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from a sidereal ecliptic longitude.
///
/// The longitude is normalized to [0, 360) and the table is scanned for the
/// containing segment. `pada = floor((lon - start) / 3.333333) + 1`, capped
/// at 4 for segments whose rounded width is slightly over 13.333333.
///
/// # Errors
/// [`VedicError::InvalidLongitude`] for NaN/infinite input,
/// [`VedicError::NoNakshatra`] if no segment matches.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> Result<NakshatraInfo, VedicError> {
    if !sidereal_lon_deg.is_finite() {
        return Err(VedicError::InvalidLongitude(sidereal_lon_deg));
    }
    let lon = normalize_360(sidereal_lon_deg);
    let segment = find_segment(lon).ok_or(VedicError::NoNakshatra(lon))?;

    let degrees_in_nakshatra = lon - segment.start_deg;
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;

    Ok(NakshatraInfo {
        nakshatra: segment.nakshatra,
        nakshatra_index: segment.nakshatra.index(),
        lord: segment.lord,
        pada,
        degrees_in_nakshatra,
    })
}

fn find_segment(lon: f64) -> Option<&'static NakshatraSegment> {
    NAKSHATRA_TABLE.iter().find(|s| s.contains(lon))
}
