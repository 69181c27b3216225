//! Identity document parser assembling all rule-based field extractors.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::fields::{ExtractedFields, FieldMatch, FieldMatches};
use crate::ocr::OcrResponse;

use super::rules::{
    address::{AddressExtractor, DEFAULT_MAX_ADDRESS_LINES},
    dates::DateOfBirthExtractor,
    gender::GenderExtractor,
    identity::IdentityNumberExtractor,
    lines::split_lines,
    name::NameExtractor,
    ExtractionMatch, FieldExtractor,
};
use super::{DocumentExtractor, Result};

/// Result of document extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted fields, empty strings for anything not found.
    pub fields: ExtractedFields,
    /// Strategy, confidence and line for each resolved field.
    pub matches: FieldMatches,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for document parsing.
///
/// Parsing never fails: unresolved fields come back as empty strings.
pub trait DocumentParser {
    /// Parse identity document fields from raw OCR text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Heuristic parser for Aadhaar-style identity cards.
#[derive(Debug, Clone)]
pub struct AadhaarParser {
    /// Lines collected after the address label.
    max_address_lines: usize,
}

impl AadhaarParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            max_address_lines: DEFAULT_MAX_ADDRESS_LINES,
        }
    }

    /// Build a parser from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_max_address_lines(config.max_address_lines)
    }

    /// Set how many lines after the address label are considered.
    pub fn with_max_address_lines(mut self, max_lines: usize) -> Self {
        self.max_address_lines = max_lines;
        self
    }
}

impl Default for AadhaarParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for AadhaarParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing identity document from {} characters of text", text.len());

        let lines = split_lines(text);
        debug!("Tokenized {} non-empty lines", lines.len());

        let dob = DateOfBirthExtractor::new().extract(&lines);
        let name = NameExtractor::new()
            .with_date_of_birth(dob.as_ref().map(|m| m.value.as_str()))
            .extract(&lines);
        let address = AddressExtractor::new()
            .with_max_lines(self.max_address_lines)
            .extract(&lines);
        let aadhaar = IdentityNumberExtractor::new().extract(&lines);
        let gender = GenderExtractor::new().extract(&lines);

        let matches = FieldMatches {
            name: name.as_ref().map(FieldMatch::from),
            dob: dob.as_ref().map(FieldMatch::from),
            address: address.as_ref().map(FieldMatch::from),
            aadhaar: aadhaar.as_ref().map(FieldMatch::from),
            gender: gender.as_ref().map(FieldMatch::from),
        };

        let fields = ExtractedFields {
            name: value_or_empty(name),
            dob: value_or_empty(dob),
            address: value_or_empty(address),
            aadhaar: value_or_empty(aadhaar),
            gender: value_or_empty(gender),
        };

        let warnings: Vec<String> = fields
            .missing_fields()
            .into_iter()
            .map(|f| format!("Could not extract {}", f))
            .collect();

        debug!(
            "Extracted {} of {} fields, missing: {:?}",
            ExtractedFields::FIELD_NAMES.len() - warnings.len(),
            ExtractedFields::FIELD_NAMES.len(),
            fields.missing_fields()
        );

        ExtractionResult {
            fields,
            matches,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl DocumentExtractor for AadhaarParser {
    fn extract(&self, response: OcrResponse) -> Result<ExtractedFields> {
        let text = response.into_text()?;
        Ok(self.extract_from_text(&text))
    }

    fn extract_from_text(&self, text: &str) -> ExtractedFields {
        self.parse(text).fields
    }
}

/// Extract the five identity document fields from raw OCR text.
pub fn extract_fields(text: &str) -> ExtractedFields {
    AadhaarParser::new().extract_from_text(text)
}

fn value_or_empty(m: Option<ExtractionMatch<String>>) -> String {
    m.map(|m| m.value).unwrap_or_default()
}
