//! Error taxonomy of the chart engine and its wire form.

use std::collections::BTreeMap;

use kundli_geo::GeoError;
use kundli_vedic_base::VedicError;
use serde::Serialize;
use thiserror::Error;

/// Expected format of each required request field.
pub(crate) fn field_format(field: &str) -> &'static str {
    match field {
        "fullName" => "non-empty string",
        "dob" => "YYYY-MM-DD",
        "tob" => "HH:MM",
        "pob" => "place name, e.g. \"Kozhikode, Kerala, India\"",
        _ => "string",
    }
}

#[derive(Error, Debug)]
pub enum KundliError {
    /// Required fields missing or unparsable. Caller should fix the input.
    #[error("invalid birth details: {details}")]
    Validation {
        fields: Vec<&'static str>,
        details: String,
    },

    /// Place of birth could not be resolved. Input may be fine.
    #[error("could not resolve place of birth '{place}': {source}")]
    Geocoding {
        place: String,
        #[source]
        source: GeoError,
    },

    /// Internal invariant failure in the chart math.
    #[error("chart computation failed: {0}")]
    Computation(#[from] VedicError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Validation,
    Geocoding,
    Computation,
}

impl KundliError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Geocoding { .. } => ErrorKind::Geocoding,
            Self::Computation(_) => ErrorKind::Computation,
        }
    }

    /// Structured failure response for the caller.
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            Self::Validation { fields, details } => ErrorResponse {
                error: "Missing or invalid birth details".to_string(),
                kind: ErrorKind::Validation,
                details: Some(details.clone()),
                required_fields: Some(
                    fields
                        .iter()
                        .map(|f| (f.to_string(), field_format(f).to_string()))
                        .collect(),
                ),
            },
            Self::Geocoding { place, source } => ErrorResponse {
                error: format!("Could not find coordinates for place of birth: {place}"),
                kind: ErrorKind::Geocoding,
                details: Some(source.to_string()),
                required_fields: None,
            },
            Self::Computation(e) => ErrorResponse {
                error: "Failed to compute birth chart".to_string(),
                kind: ErrorKind::Computation,
                details: Some(e.to_string()),
                required_fields: None,
            },
        }
    }
}

/// Failure body: `{ error, kind, details?, requiredFields? }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Fields still required, mapped to their expected format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_fields: Option<BTreeMap<String, String>>,
}
