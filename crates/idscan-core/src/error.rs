//! Error types for the idscan-core library.

use thiserror::Error;

/// Main error type for the idscan library.
#[derive(Error, Debug)]
pub enum IdscanError {
    /// OCR provider response error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Identity number or payload validation error.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors reported by, or about, the external OCR provider.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The provider flagged the request as failed.
    #[error("OCR provider error: {0}")]
    Provider(String),

    /// The provider answered with a non-success HTTP status.
    #[error("OCR provider error: HTTP status {0}")]
    Status(u16),

    /// The provider response could not be understood.
    #[error("malformed OCR response: {0}")]
    MalformedResponse(String),
}

/// Errors related to validating user-supplied values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Identity number does not normalize to exactly 12 digits.
    #[error("identity number must have 12 digits, got {len} ({digits:?})")]
    IdentityNumberLength { digits: String, len: usize },
}

/// Result type for the idscan library.
pub type Result<T> = std::result::Result<T, IdscanError>;
