//! Extracted identity document fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document::rules::{
    parse_date_of_birth, validate_identity_number, ExtractionMatch, Strategy,
};
use crate::error::Result;

/// The five fields recovered from one identity document.
///
/// An empty string means "not found"; fields are never absent when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedFields {
    /// Holder's full name, verbatim from the document.
    pub name: String,

    /// Date of birth, verbatim (e.g. `05/06/1990`).
    pub dob: String,

    /// Address lines joined with `", "`.
    pub address: String,

    /// Identity number formatted as `XXXX XXXX XXXX`.
    #[serde(alias = "idNumber")]
    pub aadhaar: String,

    /// `MALE` or `FEMALE`.
    pub gender: String,
}

impl ExtractedFields {
    /// Field names in output order.
    pub const FIELD_NAMES: [&'static str; 5] = ["name", "dob", "address", "aadhaar", "gender"];

    /// Field values paired with their names, in output order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("name", self.name.as_str()),
            ("dob", self.dob.as_str()),
            ("address", self.address.as_str()),
            ("aadhaar", self.aadhaar.as_str()),
            ("gender", self.gender.as_str()),
        ]
    }

    /// Names of fields that could not be extracted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// True when no field could be extracted.
    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, value)| value.is_empty())
    }

    /// Identity number digits, or a validation error when none was extracted.
    pub fn identity_number(&self) -> Result<String> {
        Ok(validate_identity_number(Some(&self.aadhaar))?)
    }

    /// Date of birth interpreted as day/month/year.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        parse_date_of_birth(&self.dob)
    }
}

/// Where and how a single field was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldMatch {
    pub strategy: Strategy,
    pub confidence: f32,
    pub line: usize,
}

impl<T> From<&ExtractionMatch<T>> for FieldMatch {
    fn from(m: &ExtractionMatch<T>) -> Self {
        Self {
            strategy: m.strategy,
            confidence: m.confidence,
            line: m.line,
        }
    }
}

/// How each resolved field was found.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldMatches {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<FieldMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<FieldMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhaar: Option<FieldMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<FieldMatch>,
}

/// Boundary shape: the record wrapped under an `extracted` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub extracted: ExtractedFields,
}

impl From<ExtractedFields> for ExtractionResponse {
    fn from(extracted: ExtractedFields) -> Self {
        Self { extracted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{IdscanError, ValidationError};
    use pretty_assertions::assert_eq;

    fn sample() -> ExtractedFields {
        ExtractedFields {
            name: "Rahul Kumar".to_string(),
            dob: "05/06/1990".to_string(),
            address: String::new(),
            aadhaar: "1234 5678 9012".to_string(),
            gender: "MALE".to_string(),
        }
    }

    #[test]
    fn test_serializes_all_five_keys() {
        let json = serde_json::to_value(ExtractionResponse::from(ExtractedFields::default())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "extracted": {
                    "name": "",
                    "dob": "",
                    "address": "",
                    "aadhaar": "",
                    "gender": ""
                }
            })
        );
    }

    #[test]
    fn test_deserializes_id_number_alias() {
        let fields: ExtractedFields =
            serde_json::from_str(r#"{"name":"A B","idNumber":"1234 5678 9012"}"#).unwrap();
        assert_eq!(fields.aadhaar, "1234 5678 9012");
        assert_eq!(fields.dob, "");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(sample().missing_fields(), vec!["address"]);
        assert_eq!(
            ExtractedFields::default().missing_fields(),
            ExtractedFields::FIELD_NAMES.to_vec()
        );
        assert!(ExtractedFields::default().is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn test_identity_number() {
        assert_eq!(sample().identity_number().unwrap(), "123456789012");

        let err = ExtractedFields::default().identity_number().unwrap_err();
        assert!(matches!(
            err,
            IdscanError::Validation(ValidationError::IdentityNumberLength { len: 0, .. })
        ));
    }

    #[test]
    fn test_birth_date() {
        assert_eq!(sample().birth_date(), NaiveDate::from_ymd_opt(1990, 6, 5));
        assert_eq!(ExtractedFields::default().birth_date(), None);
    }
}
