//! Core library for identity document OCR processing.
//!
//! This crate provides:
//! - Field extraction from raw OCR text (name, date of birth, address,
//!   12-digit identity number, gender)
//! - Identity number normalization and validation
//! - OCR provider response parsing
//! - Configuration models

pub mod document;
pub mod error;
pub mod models;
pub mod ocr;

pub use document::rules::{
    format_identity_number, is_valid_identity_number, normalize_identity_number,
    validate_identity_number,
};
pub use document::{extract_fields, AadhaarParser, DocumentExtractor, DocumentParser, ExtractionResult};
pub use error::{IdscanError, OcrError, Result, ValidationError};
pub use models::{ExtractedFields, ExtractionResponse, FieldMatch, FieldMatches, IdscanConfig};
pub use ocr::OcrResponse;
