//! Place-of-birth geocoding.
//!
//! The chart engine only sees the [`GeoResolver`] trait; this crate ships a
//! Nominatim HTTP implementation and a static in-memory one.

pub mod coordinate;
pub mod error;
pub mod nominatim;
pub mod resolver;
pub mod static_table;

pub use coordinate::GeoCoordinate;
pub use error::GeoError;
pub use nominatim::{DEFAULT_BASE_URL, NominatimResolver, parse_search_results};
pub use resolver::GeoResolver;
pub use static_table::StaticResolver;
