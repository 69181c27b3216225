//! Data models for extracted fields and configuration.

pub mod config;
pub mod fields;

pub use config::{ExtractionConfig, IdscanConfig, OcrConfig};
pub use fields::{ExtractedFields, ExtractionResponse, FieldMatch, FieldMatches};
