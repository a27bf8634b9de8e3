//! The geocoding capability consumed by the chart engine.

use std::sync::Arc;

use async_trait::async_trait;

use crate::coordinate::GeoCoordinate;
use crate::error::GeoError;

/// Resolves a free-text place name to a coordinate.
///
/// An empty result set is reported as [`GeoError::NotFound`]; transport
/// failures and timeouts as the other variants. Implementations do not retry.
#[async_trait]
pub trait GeoResolver: Send + Sync {
    async fn resolve(&self, place: &str) -> Result<GeoCoordinate, GeoError>;
}

#[async_trait]
impl<T: GeoResolver + ?Sized> GeoResolver for Arc<T> {
    async fn resolve(&self, place: &str) -> Result<GeoCoordinate, GeoError> {
        (**self).resolve(place).await
    }
}

#[async_trait]
impl<T: GeoResolver + ?Sized> GeoResolver for Box<T> {
    async fn resolve(&self, place: &str) -> Result<GeoCoordinate, GeoError> {
        (**self).resolve(place).await
    }
}
