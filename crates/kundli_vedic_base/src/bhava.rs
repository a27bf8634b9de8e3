//! Equal-house bhava computation.
//!
//! Bhava 1 starts at the lagna; each following bhava is offset by a further
//! 30 deg of ecliptic longitude. Each bhava carries the rashi its starting
//! point falls in and a traditional name.

use std::borrow::Cow;

use crate::rashi::{RASHI_SPAN, RashiInfo, rashi_from_longitude};
use crate::util::normalize_360;

/// Traditional names of the 12 bhavas, indexed by house number − 1.
pub const BHAVA_NAMES: [&str; 12] = [
    "Lagna",
    "Dhana",
    "Sahaja",
    "Sukha",
    "Putra",
    "Ari",
    "Yuvati",
    "Randhra",
    "Dharma",
    "Karma",
    "Labha",
    "Vyaya",
];

/// Name of bhava `number` (1-12), or `"House N"` outside that range.
pub fn bhava_name(number: u8) -> Cow<'static, str> {
    match number {
        1..=12 => Cow::Borrowed(BHAVA_NAMES[(number - 1) as usize]),
        n => Cow::Owned(format!("House {n}")),
    }
}

/// A single bhava (house).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bhava {
    /// House number, 1-12.
    pub number: u8,
    /// Ecliptic longitude where the bhava starts, [0, 360).
    pub start_deg: f64,
    /// Rashi and degree of the starting point.
    pub rashi: RashiInfo,
}

impl Bhava {
    /// Traditional name of this bhava.
    pub fn name(&self) -> Cow<'static, str> {
        bhava_name(self.number)
    }
}

/// Compute the 12 equal bhavas from a lagna longitude.
///
/// `bhavas[0]` is house 1 and has the lagna's own rashi and degree.
pub fn equal_bhavas(lagna_deg: f64) -> [Bhava; 12] {
    std::array::from_fn(|i| {
        let start_deg = normalize_360(lagna_deg + i as f64 * RASHI_SPAN);
        Bhava {
            number: i as u8 + 1,
            start_deg,
            rashi: rashi_from_longitude(start_deg),
        }
    })
}
