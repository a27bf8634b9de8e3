//! Birth request as received, and its validated form.

use kundli_time::{TimeError, UtcTime};
use serde::Deserialize;

use crate::error::KundliError;

/// Raw request: `{ fullName, dob, tob, pob, gender? }`.
///
/// Every field is optional here so that missing fields can be reported
/// together instead of failing on the first one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    /// Date of birth, `YYYY-MM-DD`.
    #[serde(default)]
    pub dob: Option<String>,
    /// Time of birth (UTC), `HH:MM`.
    #[serde(default)]
    pub tob: Option<String>,
    /// Place of birth, free text.
    #[serde(default)]
    pub pob: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInput {
    pub full_name: String,
    pub birth_time: UtcTime,
    pub place: String,
    pub gender: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl BirthRequest {
    pub fn new(full_name: &str, dob: &str, tob: &str, pob: &str) -> Self {
        Self {
            full_name: Some(full_name.to_string()),
            dob: Some(dob.to_string()),
            tob: Some(tob.to_string()),
            pob: Some(pob.to_string()),
            gender: None,
        }
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = Some(gender.to_string());
        self
    }

    /// Check required fields and parse the birth instant.
    ///
    /// Missing fields are reported first (all of them); only when all four
    /// are present are `dob`/`tob` parsed, again reporting every bad field.
    pub fn validate(&self, default_gender: &str) -> Result<BirthInput, KundliError> {
        let full_name = present(&self.full_name);
        let dob = present(&self.dob);
        let tob = present(&self.tob);
        let pob = present(&self.pob);

        let missing: Vec<&'static str> = [
            ("fullName", full_name.is_none()),
            ("dob", dob.is_none()),
            ("tob", tob.is_none()),
            ("pob", pob.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        let (Some(full_name), Some(dob), Some(tob), Some(pob)) = (full_name, dob, tob, pob) else {
            return Err(KundliError::Validation {
                details: format!("missing required fields: {}", missing.join(", ")),
                fields: missing,
            });
        };

        let birth_time = UtcTime::parse(dob, tob).map_err(|first| {
            // parse() stops at the date; check the time separately so both
            // can be reported at once.
            let mut errors = vec![first];
            if errors[0].field() == "dob" {
                if let Err(e) = UtcTime::parse("2000-01-01", tob) {
                    errors.push(e);
                }
            }
            invalid_fields(&errors)
        })?;

        let gender = present(&self.gender).unwrap_or(default_gender);

        Ok(BirthInput {
            full_name: full_name.to_string(),
            birth_time,
            place: pob.to_string(),
            gender: gender.to_string(),
        })
    }
}

fn invalid_fields(errors: &[TimeError]) -> KundliError {
    KundliError::Validation {
        fields: errors.iter().map(TimeError::field).collect(),
        details: errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    }
}
