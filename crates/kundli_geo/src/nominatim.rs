//! HTTP geocoder backed by a Nominatim (OpenStreetMap) search endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::coordinate::GeoCoordinate;
use crate::error::GeoError;
use crate::resolver::GeoResolver;

/// Public Nominatim instance.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim search client.
///
/// One `GET {base_url}/search?q=..&format=json&limit=1` per lookup, bounded
/// by the client timeout. No retries.
pub struct NominatimResolver {
    client: reqwest::Client,
    base_url: String,
}

/// One hit in a Nominatim `format=json` search response.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl NominatimResolver {
    /// Create a resolver for the given base URL (no trailing slash needed).
    ///
    /// Nominatim's usage policy requires an identifying User-Agent.
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, GeoError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search endpoint URL.
    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[async_trait]
impl GeoResolver for NominatimResolver {
    async fn resolve(&self, place: &str) -> Result<GeoCoordinate, GeoError> {
        let url = self.search_url();
        info!(url = %url, place, "geocoding place of birth");

        let resp = self
            .client
            .get(&url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| transport_error(place, e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), place, "geocoder returned an error status");
            return Err(GeoError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await.map_err(|e| transport_error(place, e))?;
        let coord = parse_search_results(place, &body)?;
        debug!(place, lat = coord.lat(), lng = coord.lng(), "geocoded");
        Ok(coord)
    }
}

fn transport_error(place: &str, e: reqwest::Error) -> GeoError {
    if e.is_timeout() {
        GeoError::Timeout {
            place: place.to_string(),
        }
    } else {
        GeoError::Http(e)
    }
}

/// Extract the first coordinate from a Nominatim JSON search body.
///
/// An empty array is [`GeoError::NotFound`]. Nominatim encodes `lat`/`lon`
/// as decimal strings.
pub fn parse_search_results(place: &str, body: &str) -> Result<GeoCoordinate, GeoError> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)?;
    let Some(hit) = hits.into_iter().next() else {
        return Err(GeoError::NotFound {
            place: place.to_string(),
        });
    };
    if let Some(name) = &hit.display_name {
        debug!(place, display_name = %name, "first geocoder match");
    }
    let lat = parse_degrees("lat", &hit.lat)?;
    let lng = parse_degrees("lon", &hit.lon)?;
    GeoCoordinate::new(lat, lng)
}

fn parse_degrees(field: &str, raw: &str) -> Result<f64, GeoError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| GeoError::InvalidResponse(format!("{field} is not a number: '{raw}'")))
}
