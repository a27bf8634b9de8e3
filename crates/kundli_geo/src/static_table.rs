//! In-memory resolver: a fixed place table, optionally with a catch-all
//! coordinate. No I/O.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::coordinate::GeoCoordinate;
use crate::error::GeoError;
use crate::resolver::GeoResolver;

/// Resolves place names from a case-insensitive lookup table.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    places: HashMap<String, GeoCoordinate>,
    fallback: Option<GeoCoordinate>,
}

fn key(place: &str) -> String {
    place.trim().to_lowercase()
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver that answers every place with `coord`.
    pub fn fixed(coord: GeoCoordinate) -> Self {
        Self {
            places: HashMap::new(),
            fallback: Some(coord),
        }
    }

    /// Add (or replace) a place.
    pub fn with_place(mut self, place: &str, coord: GeoCoordinate) -> Self {
        self.places.insert(key(place), coord);
        self
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[async_trait]
impl GeoResolver for StaticResolver {
    async fn resolve(&self, place: &str) -> Result<GeoCoordinate, GeoError> {
        self.places
            .get(&key(place))
            .copied()
            .or(self.fallback)
            .ok_or_else(|| GeoError::NotFound {
                place: place.to_string(),
            })
    }
}
