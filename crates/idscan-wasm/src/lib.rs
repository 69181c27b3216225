//! WASM bindings for identity document field extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js,
//! e.g. to prefill a registration form from a client-side OCR pass.

use wasm_bindgen::prelude::*;

use idscan_core::document::{AadhaarParser, DocumentExtractor, DocumentParser};
use idscan_core::models::{ExtractedFields, FieldMatches};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract identity fields from raw OCR text.
///
/// Returns `{name, dob, address, aadhaar, gender}`; missing fields are `""`.
#[wasm_bindgen]
pub fn extract_fields_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&idscan_core::extract_fields(text))
}

/// Extract identity fields from an OCR.space JSON response body.
#[wasm_bindgen]
pub fn extract_fields_from_ocr_response(body: &str) -> Result<JsValue, JsValue> {
    let fields = AadhaarParser::new()
        .extract_from_json(body)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&fields)
}

/// Strip everything but digits from an identity number.
#[wasm_bindgen]
pub fn normalize_identity_number(input: Option<String>) -> String {
    idscan_core::normalize_identity_number(input.as_deref().unwrap_or_default())
}

/// True when the input normalizes to exactly 12 digits.
#[wasm_bindgen]
pub fn is_valid_identity_number(input: &str) -> bool {
    idscan_core::is_valid_identity_number(input)
}

/// Format an identity number as `XXXX XXXX XXXX`.
#[wasm_bindgen]
pub fn format_identity_number(input: &str) -> String {
    idscan_core::format_identity_number(input)
}

/// Field extractor class for browser use.
#[wasm_bindgen]
pub struct FieldExtractor {
    parser: AadhaarParser,
}

#[wasm_bindgen]
impl FieldExtractor {
    /// Create a new field extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: AadhaarParser::new(),
        }
    }

    /// Limit how many lines after the address label are collected.
    #[wasm_bindgen]
    pub fn set_max_address_lines(&mut self, max_lines: usize) {
        self.parser = AadhaarParser::new().with_max_address_lines(max_lines);
    }

    /// Extract fields from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text).fields)
    }

    /// Get extraction result with per-field strategies and warnings.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);

        #[derive(serde::Serialize)]
        struct ExtractResult {
            extracted: ExtractedFields,
            matches: FieldMatches,
            warnings: Vec<String>,
            processing_time_ms: u64,
        }

        to_js(&ExtractResult {
            extracted: result.fields,
            matches: result.matches,
            warnings: result.warnings,
            processing_time_ms: result.processing_time_ms,
        })
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines recognized by a browser-side OCR engine, fed in one at a time.
#[wasm_bindgen]
pub struct OcrLines {
    lines: Vec<String>,
}

#[wasm_bindgen]
impl OcrLines {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a recognized line.
    #[wasm_bindgen]
    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// All lines joined with newlines.
    #[wasm_bindgen]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Extract identity fields from the collected lines.
    #[wasm_bindgen]
    pub fn extract(&self) -> Result<JsValue, JsValue> {
        extract_fields_from_text(&self.text())
    }
}

impl Default for OcrLines {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_normalize_identity_number() {
        assert_eq!(
            normalize_identity_number(Some("1234-5678-9012".to_string())),
            "123456789012"
        );
        assert_eq!(normalize_identity_number(None), "");
        assert!(is_valid_identity_number("1234 5678 9012"));
        assert!(!is_valid_identity_number("1234"));
    }

    #[wasm_bindgen_test]
    fn test_format_identity_number() {
        assert_eq!(format_identity_number("123456789012"), "1234 5678 9012");
    }

    #[wasm_bindgen_test]
    fn test_ocr_lines_text() {
        let mut lines = OcrLines::new();
        lines.push("Meera Joshi");
        lines.push("FEMALE");
        assert_eq!(lines.text(), "Meera Joshi\nFEMALE");
    }
}
