//! Birth-chart (kundli) engine.
//!
//! This crate provides:
//! - Request validation ([`BirthRequest`] -> [`BirthInput`])
//! - Place resolution through any [`kundli_geo::GeoResolver`]
//! - Chart assembly ([`compute_chart`], [`KundliEngine`])
//! - Structured success and error bodies ([`KundliResult`], [`ErrorResponse`])

pub mod assembler;
pub mod chart;
pub mod error;
pub mod input;

pub use assembler::{KundliEngine, KundliResponse, compute_chart};
pub use chart::{
    DISCLAIMER, DmsView, HouseEntry, KundliResult, NakshatraView, PersonalInfo, SiderealPosition,
    SunPosition, ZodiacPosition,
};
pub use error::{ErrorKind, ErrorResponse, KundliError};
pub use input::{BirthInput, BirthRequest};
