//! Chart assembly: validate, geocode, then run the chart math in order.
//!
//! Stages, in order:
//! 1. Julian Day from the UTC birth instant
//! 2. Lahiri ayanamsa
//! 3. Tropical and sidereal Sun
//! 4. Lagna and the 12 equal houses
//! 5. Nakshatra of the sidereal Sun
//!
//! [`compute_chart`] is pure. [`KundliEngine`] adds validation and the
//! geocoder call in front of it and holds no per-request state, so a single
//! engine can serve concurrent requests.

use kundli_config::KundliConfig;
use kundli_geo::{GeoCoordinate, GeoResolver, NominatimResolver};
use kundli_vedic_base::{
    ayanamsha_deg, equal_bhavas, lagna_longitude_deg, nakshatra_from_longitude,
    rashi_from_longitude, sidereal_longitude, sun_tropical_longitude_deg,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::chart::{
    DISCLAIMER, HouseEntry, KundliResult, NakshatraView, PersonalInfo, SiderealPosition,
    SunPosition, ZodiacPosition,
};
use crate::error::{ErrorResponse, KundliError};
use crate::input::{BirthInput, BirthRequest};

/// Compute a chart for validated input at known coordinates.
///
/// # Errors
/// [`KundliError::Computation`] if the sidereal Sun falls outside every
/// nakshatra segment.
pub fn compute_chart(input: &BirthInput, coords: GeoCoordinate) -> Result<KundliResult, KundliError> {
    let jd = input.birth_time.to_jd();
    let ayanamsa = ayanamsha_deg(jd);

    let sun_tropical = sun_tropical_longitude_deg(jd);
    let sun_sidereal = sidereal_longitude(sun_tropical, ayanamsa);

    let lagna = lagna_longitude_deg(jd, coords.lat(), coords.lng());
    let houses = equal_bhavas(lagna);

    let nakshatra = nakshatra_from_longitude(sun_sidereal)?;

    debug!(
        jd,
        ayanamsa, sun_tropical, sun_sidereal, lagna, "chart stages computed"
    );

    Ok(KundliResult {
        personal_info: PersonalInfo {
            full_name: input.full_name.clone(),
            date_of_birth: input.birth_time.date_string(),
            time_of_birth: input.birth_time.time_string(),
            place_of_birth: input.place.clone(),
            gender: input.gender.clone(),
            coordinates: coords,
            julian_day: jd,
        },
        ascendant: ZodiacPosition::from(&rashi_from_longitude(lagna)),
        sun_position: SunPosition {
            tropical: ZodiacPosition::from(&rashi_from_longitude(sun_tropical)),
            sidereal: SiderealPosition {
                position: ZodiacPosition::from(&rashi_from_longitude(sun_sidereal)),
                nakshatra: NakshatraView::from(&nakshatra),
            },
        },
        houses: houses.iter().map(HouseEntry::from).collect(),
        ayanamsa,
        disclaimer: DISCLAIMER,
    })
}

/// Either body the engine can answer with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KundliResponse {
    Chart(Box<KundliResult>),
    Error(ErrorResponse),
}

impl KundliResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Chart(_))
    }
}

/// Request-level entry point, generic over the place resolver.
#[derive(Debug, Clone)]
pub struct KundliEngine<R> {
    resolver: R,
    default_gender: String,
}

impl KundliEngine<NominatimResolver> {
    /// Engine backed by the Nominatim geocoder described in `config`.
    pub fn from_config(config: &KundliConfig) -> Result<Self, kundli_geo::GeoError> {
        let g = &config.geocoder;
        let resolver = NominatimResolver::new(&g.base_url, g.timeout, &g.user_agent)?;
        Ok(Self::new(resolver, &config.default_gender))
    }
}

impl<R: GeoResolver> KundliEngine<R> {
    pub fn new(resolver: R, default_gender: &str) -> Self {
        Self {
            resolver,
            default_gender: default_gender.to_string(),
        }
    }

    /// Validate, geocode and compute.
    ///
    /// Validation runs before the geocoder is contacted; nothing is
    /// computed unless the place resolves.
    pub async fn generate(&self, request: &BirthRequest) -> Result<KundliResult, KundliError> {
        let input = request.validate(&self.default_gender).inspect_err(|e| {
            warn!(error = %e, "birth request rejected");
        })?;

        let coords = self
            .resolver
            .resolve(&input.place)
            .await
            .map_err(|source| {
                warn!(place = %input.place, error = %source, "geocoding failed");
                KundliError::Geocoding {
                    place: input.place.clone(),
                    source,
                }
            })?;
        debug!(place = %input.place, lat = coords.lat(), lng = coords.lng(), "place resolved");

        let chart = compute_chart(&input, coords)?;
        info!(
            ascendant = chart.ascendant.sign,
            sun_sign = chart.sun_position.sidereal.position.sign,
            nakshatra = chart.sun_position.sidereal.nakshatra.name,
            "kundli generated"
        );
        Ok(chart)
    }

    /// Like [`generate`](Self::generate), folding failures into an
    /// [`ErrorResponse`].
    pub async fn respond(&self, request: &BirthRequest) -> KundliResponse {
        match self.generate(request).await {
            Ok(chart) => KundliResponse::Chart(Box::new(chart)),
            Err(e) => KundliResponse::Error(e.to_response()),
        }
    }
}
