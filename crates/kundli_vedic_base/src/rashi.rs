//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. The same mapping is used for
//! tropical and sidereal longitudes; the caller picks the frame.

use crate::util::normalize_360;

/// Width of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// Zodiac sign, in ecliptic order from 0 deg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// Rashis indexed by `floor(lon / 30)`.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// English sign name, as shown next to the Sanskrit one.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// An angle split into whole degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u64,
    /// 0..=59
    pub minutes: u8,
    /// [0, 60), in whole milliarcseconds.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    /// Seconds are shown to a tenth; rounding carries into minutes and degrees.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tenths = (self.seconds * 10.0).round() as u64;
        let minutes = u64::from(self.minutes) + tenths / 600;
        let tenths = tenths % 600;
        let degrees = self.degrees.saturating_add(minutes / 60);
        write!(
            f,
            "{degrees}°{:02}'{:02}.{}\"",
            minutes % 60,
            tenths / 10,
            tenths % 10
        )
    }
}

/// Where a longitude falls in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// `rashi.index()`, 0..=11.
    pub rashi_index: u8,
    /// The input longitude wrapped into [0, 360).
    pub longitude_deg: f64,
    /// `degrees_in_rashi` as DMS.
    pub dms: Dms,
    /// Offset from the start of the sign, [0, 30).
    pub degrees_in_rashi: f64,
}

const MAS_PER_DEG: u64 = 3_600_000;
const MAS_PER_MIN: u64 = 60_000;

/// Split `deg` into degrees, minutes and seconds. The sign is dropped.
///
/// The fraction is rounded to the nearest milliarcsecond before splitting,
/// carrying into the degrees when it rounds up to a whole degree.
pub fn deg_to_dms(deg: f64) -> Dms {
    let abs = deg.abs();
    let whole = abs.trunc();
    let mut degrees = whole as u64;
    let mut mas = ((abs - whole) * MAS_PER_DEG as f64).round() as u64;
    if mas >= MAS_PER_DEG {
        degrees = degrees.saturating_add(1);
        mas -= MAS_PER_DEG;
    }
    Dms {
        degrees,
        minutes: (mas / MAS_PER_MIN) as u8,
        seconds: (mas % MAS_PER_MIN) as f64 / 1000.0,
    }
}

/// Inverse of [`deg_to_dms`] for non-negative angles.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0
}

/// Sign and in-sign offset of an ecliptic longitude.
///
/// The longitude is wrapped into [0, 360) first, so inputs that differ by
/// whole turns map to the same sign. The index is clamped to 11 in case
/// floating-point wrapping lands exactly on 360.
pub fn rashi_from_longitude(lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(lon_deg);
    let index = ((lon / RASHI_SPAN).floor() as u8).min(11);
    let degrees_in_rashi = lon - f64::from(index) * RASHI_SPAN;

    RashiInfo {
        rashi: ALL_RASHIS[usize::from(index)],
        rashi_index: index,
        longitude_deg: lon,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_table_position() {
        assert!(ALL_RASHIS.iter().enumerate().all(|(i, r)| r.index() as usize == i));
        assert_eq!(Rashi::all()[11], Rashi::Meena);
    }

    #[test]
    fn english_and_sanskrit_names() {
        assert_eq!(Rashi::Karka.name(), "Karka");
        assert_eq!(Rashi::Karka.western_name(), "Cancer");
        assert_eq!(Rashi::Dhanu.western_name(), "Sagittarius");
    }

    #[test]
    fn dms_of_sidereal_sun_at_j2000() {
        // 256.61096 deg sidereal is 16.61096 deg into Dhanu
        let info = rashi_from_longitude(256.610_96);
        assert_eq!(info.rashi, Rashi::Dhanu);
        assert_eq!(info.dms.degrees, 16);
        assert_eq!(info.dms.minutes, 36);
        assert!((info.dms.seconds - 39.456).abs() < 1e-3);
        assert!((dms_to_deg(&info.dms) - info.degrees_in_rashi).abs() < 1e-6);
    }

    #[test]
    fn dms_display() {
        assert_eq!(deg_to_dms(10.5).to_string(), "10°30'00.0\"");
        assert_eq!(deg_to_dms(-3.25).to_string(), "3°15'00.0\"");
    }

    #[test]
    fn sign_starts_are_inclusive() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            let info = rashi_from_longitude(i as f64 * RASHI_SPAN);
            assert_eq!(info.rashi, *r);
            assert_eq!(info.degrees_in_rashi, 0.0);
        }
    }

    #[test]
    fn ascendant_in_karka() {
        let info = rashi_from_longitude(100.221_99);
        assert_eq!(info.rashi, Rashi::Karka);
        assert!((info.degrees_in_rashi - 10.221_99).abs() < 1e-9);
    }

    #[test]
    fn whole_turns_wrap() {
        let info = rashi_from_longitude(725.0);
        assert_eq!(info.rashi, Rashi::Mesha);
        assert!((info.longitude_deg - 5.0).abs() < 1e-10);

        let info = rashi_from_longitude(-45.0);
        assert_eq!(info.rashi, Rashi::Kumbha);
        assert!((info.degrees_in_rashi - 15.0).abs() < 1e-10);
    }

    #[test]
    fn just_past_full_circle_is_mesha() {
        let info = rashi_from_longitude(359.999_999 + 0.000_002);
        assert_eq!(info.rashi_index, 0);
        assert!(info.degrees_in_rashi < 1e-5);
    }

    #[test]
    fn just_below_full_circle_is_meena() {
        let info = rashi_from_longitude(359.999_999_999);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!(info.degrees_in_rashi < RASHI_SPAN);
    }

    #[test]
    fn seconds_rounding_carries_into_minutes_and_degrees() {
        let d = deg_to_dms(10.999_999_99);
        assert_eq!((d.degrees, d.minutes), (11, 0));
        assert_eq!(d.to_string(), "11°00'00.0\"");

        let info = rashi_from_longitude(29.999_999_99);
        assert_eq!(info.rashi, Rashi::Mesha);
        assert_eq!(info.dms.to_string(), "30°00'00.0\"");
    }

    #[test]
    fn display_carries_tenths_of_a_second() {
        let d = Dms {
            degrees: 4,
            minutes: 59,
            seconds: 59.96,
        };
        assert_eq!(d.to_string(), "5°00'00.0\"");
        assert!(!deg_to_dms(12.345_678).to_string().contains("60.0"));
    }

    #[test]
    fn large_angles_keep_whole_degrees() {
        let d = deg_to_dms(100_000.0);
        assert_eq!(d.degrees, 100_000);
        assert_eq!(d.to_string(), "100000°00'00.0\"");
        assert_eq!(deg_to_dms(-5_000_000.5).degrees, 5_000_000);
    }
}
