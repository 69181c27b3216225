//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::document::rules::address::DEFAULT_MAX_ADDRESS_LINES;
use crate::error::{IdscanError, Result};

/// Environment variable overriding [`OcrConfig::api_key`].
pub const API_KEY_ENV: &str = "OCR_SPACE_API_KEY";

/// Environment variable overriding [`OcrConfig::api_url`].
pub const API_URL_ENV: &str = "OCR_SPACE_API_URL";

/// Main configuration for the idscan pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdscanConfig {
    /// OCR provider configuration.
    pub ocr: OcrConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// External OCR provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Endpoint accepting multipart image uploads.
    pub api_url: String,

    /// API key sent with each request.
    pub api_key: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// OCR language code.
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.ocr.space/parse/image".to_string(),
            api_key: "helloworld".to_string(), // Public demo key
            timeout_secs: 30,
            language: "eng".to_string(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of lines collected after the address label.
    pub max_address_lines: usize,

    /// Treat a document without a valid identity number as a failure.
    pub require_identity_number: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_address_lines: DEFAULT_MAX_ADDRESS_LINES,
            require_identity_number: false,
        }
    }
}

impl IdscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `OCR_SPACE_API_KEY` / `OCR_SPACE_API_URL` from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.ocr.api_key = key;
        }
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.is_empty()) {
            self.ocr.api_url = url;
        }
        self
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.ocr.api_url.trim().is_empty() {
            return Err(IdscanError::Config("ocr.api_url must not be empty".to_string()));
        }
        if self.ocr.timeout_secs == 0 {
            return Err(IdscanError::Config("ocr.timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extraction": {"max_address_lines": 3}}"#).unwrap();

        let config = IdscanConfig::from_file(&path).unwrap();
        assert_eq!(config.extraction.max_address_lines, 3);
        assert!(!config.extraction.require_identity_number);
        assert_eq!(config.ocr.api_url, "https://api.ocr.space/parse/image");
        assert_eq!(config.ocr.timeout_secs, 30);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = IdscanConfig::default();
        config.ocr.language = "hin".to_string();
        config.save(&path).unwrap();

        let loaded = IdscanConfig::from_file(&path).unwrap();
        assert_eq!(loaded.ocr.language, "hin");
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"ocr": {"timeout_secs": 0}}"#).unwrap();

        assert!(matches!(
            IdscanConfig::from_file(&path),
            Err(IdscanError::Config(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = IdscanConfig::default().with_overrides(|key| match key {
            API_KEY_ENV => Some("secret".to_string()),
            API_URL_ENV => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.ocr.api_key, "secret");
        assert_eq!(config.ocr.api_url, "https://api.ocr.space/parse/image");
    }
}
