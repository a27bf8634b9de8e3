//! Apparent ecliptic longitude of the Sun, low-precision series.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed), Chapter 25: geometric mean
//! longitude plus a three-term equation of center, then a combined
//! nutation/aberration correction. Accuracy is about 0.01 deg.

use kundli_time::jd_to_centuries;

use crate::util::normalize_360;

/// Intermediate terms of the solar position series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarElements {
    /// Julian centuries since J2000.0.
    pub t_centuries: f64,
    /// Geometric mean longitude L0, degrees (not normalized).
    pub mean_longitude_deg: f64,
    /// Mean anomaly M, degrees (not normalized).
    pub mean_anomaly_deg: f64,
    /// Eccentricity of Earth's orbit.
    pub eccentricity: f64,
    /// Equation of center C, degrees.
    pub equation_of_center_deg: f64,
    /// True longitude L0 + C, degrees, [0, 360).
    pub true_longitude_deg: f64,
    /// Longitude of the Moon's ascending node Ω, degrees (not normalized).
    pub omega_deg: f64,
    /// Apparent longitude, degrees, [0, 360).
    pub apparent_longitude_deg: f64,
}

/// Evaluate the full solar series at a Julian Day.
pub fn solar_elements(jd: f64) -> SolarElements {
    let t = jd_to_centuries(jd);
    let t2 = t * t;

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let m_rad = m.to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let true_lon = l0 + c;
    let omega = 125.04 - 1_934.136 * t;
    let apparent = true_lon - 0.005_69 - 0.004_78 * omega.to_radians().sin();

    SolarElements {
        t_centuries: t,
        mean_longitude_deg: l0,
        mean_anomaly_deg: m,
        eccentricity: e,
        equation_of_center_deg: c,
        true_longitude_deg: normalize_360(true_lon),
        omega_deg: omega,
        apparent_longitude_deg: normalize_360(apparent),
    }
}

/// Sun's tropical (apparent) ecliptic longitude in degrees, [0, 360).
pub fn sun_tropical_longitude_deg(jd: f64) -> f64 {
    solar_elements(jd).apparent_longitude_deg
}
