//! Identity document field extraction module.

mod parser;
pub mod rules;

pub use parser::{extract_fields, AadhaarParser, DocumentParser, ExtractionResult};

use crate::error::OcrError;
use crate::models::fields::ExtractedFields;
use crate::ocr::OcrResponse;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, OcrError>;

/// Trait for identity document field extractors.
pub trait DocumentExtractor {
    /// Extract fields from an OCR provider response.
    fn extract(&self, response: OcrResponse) -> Result<ExtractedFields>;

    /// Extract fields from plain text.
    fn extract_from_text(&self, text: &str) -> ExtractedFields;

    /// Extract fields from a raw OCR provider response body.
    fn extract_from_json(&self, body: &str) -> crate::Result<ExtractedFields> {
        let response = OcrResponse::from_json(body)?;
        Ok(self.extract(response)?)
    }
}
