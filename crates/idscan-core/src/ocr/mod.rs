//! OCR provider response model.
//!
//! Text recognition happens in an external service (OCR.space). This module
//! only understands its JSON answer and pulls out the recognized text.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::OcrError;

/// Top-level OCR.space response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OcrResponse {
    /// One entry per processed page/image.
    pub parsed_results: Option<Vec<ParsedResult>>,

    /// Provider exit code (1 = parsed, 2 = partially parsed, 3/4 = failed).
    #[serde(rename = "OCRExitCode")]
    pub ocr_exit_code: Option<i32>,

    /// Set by the provider when the whole request failed.
    pub is_errored_on_processing: bool,

    /// Error description(s) when processing failed.
    pub error_message: Option<ErrorMessage>,
}

/// Recognition result for a single page/image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ParsedResult {
    /// Concatenated recognized text, lines separated by `\r\n`.
    pub parsed_text: Option<String>,

    pub file_parse_exit_code: Option<i32>,

    pub error_message: Option<ErrorMessage>,
}

/// The provider sends either a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    /// All messages joined with `"; "`.
    pub fn join(&self) -> String {
        match self {
            ErrorMessage::One(msg) => msg.clone(),
            ErrorMessage::Many(msgs) => msgs.join("; "),
        }
    }
}

impl OcrResponse {
    /// Parse a provider response body.
    pub fn from_json(body: &str) -> Result<Self, OcrError> {
        serde_json::from_str(body).map_err(|e| OcrError::MalformedResponse(e.to_string()))
    }

    /// Text of the first result, or `""` when there is none.
    pub fn parsed_text(&self) -> &str {
        self.parsed_results
            .as_deref()
            .and_then(|results| results.first())
            .and_then(|r| r.parsed_text.as_deref())
            .unwrap_or_default()
    }

    /// Recognized text, failing if the provider reported an error.
    pub fn into_text(self) -> Result<String, OcrError> {
        if self.is_errored_on_processing {
            let msg = self
                .error_message
                .as_ref()
                .map(ErrorMessage::join)
                .unwrap_or_else(|| "processing failed".to_string());
            warn!("OCR provider reported an error: {}", msg);
            return Err(OcrError::Provider(msg));
        }

        let text = self.parsed_text().to_string();
        debug!(
            "OCR provider returned {} chars (exit code {:?})",
            text.len(),
            self.ocr_exit_code
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_text_from_first_result() {
        let body = r#"{
            "ParsedResults": [
                {"FileParseExitCode": 1, "ParsedText": "Rahul Kumar\r\nDOB: 05/06/1990\r\n", "ErrorMessage": ""},
                {"FileParseExitCode": 1, "ParsedText": "second page"}
            ],
            "OCRExitCode": 1,
            "IsErroredOnProcessing": false,
            "ProcessingTimeInMilliseconds": "312"
        }"#;

        let response = OcrResponse::from_json(body).unwrap();
        assert_eq!(response.parsed_text(), "Rahul Kumar\r\nDOB: 05/06/1990\r\n");
        assert_eq!(response.ocr_exit_code, Some(1));
    }

    #[test]
    fn test_missing_results_yield_empty_text() {
        let empty = OcrResponse::from_json(r#"{"ParsedResults": []}"#).unwrap();
        assert_eq!(empty.parsed_text(), "");

        let absent = OcrResponse::from_json("{}").unwrap();
        assert_eq!(absent.parsed_text(), "");

        let null_text = OcrResponse::from_json(r#"{"ParsedResults": [{"ParsedText": null}]}"#).unwrap();
        assert_eq!(null_text.into_text().unwrap(), "");
    }

    #[test]
    fn test_provider_error() {
        let body = r#"{
            "OCRExitCode": 99,
            "IsErroredOnProcessing": true,
            "ErrorMessage": ["Unable to recognize the file type", "E216"]
        }"#;

        let err = OcrResponse::from_json(body).unwrap().into_text().unwrap_err();
        assert!(matches!(err, OcrError::Provider(ref m) if m == "Unable to recognize the file type; E216"));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            OcrResponse::from_json("<html>502</html>"),
            Err(OcrError::MalformedResponse(_))
        ));
    }
}
