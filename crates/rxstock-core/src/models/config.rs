//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RxError;

/// Default cloud extraction endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://extraction-api.nanonets.com/extract";

/// Main configuration for rxstock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RxConfig {
    /// Extraction provider configuration.
    pub provider: ProviderConfig,

    /// Extraction adapter configuration.
    pub extraction: ExtractionConfig,

    /// Line parser configuration.
    pub parser: ParserConfig,
}

/// Cloud provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Extraction endpoint URL.
    pub endpoint: String,

    /// Request timeout in seconds (`None` = no timeout).
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: Some(300),
            user_agent: concat!("rxstock/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Extraction adapter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum input size in megabytes.
    pub max_file_size_mb: u64,

    /// Trimmed output must be longer than this to be accepted.
    pub min_content_length: usize,

    /// Number of characters kept in the text preview.
    pub preview_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 50,
            min_content_length: 10,
            preview_length: 200,
        }
    }
}

/// Line parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Trimmed lines shorter than this are skipped.
    pub min_line_length: usize,

    /// Maximum number of unique items returned.
    pub max_items: usize,

    /// Emit zero quantities and values present in the line as `0` instead of `null`.
    pub keep_zero_values: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_line_length: 5,
            max_items: 50,
            keep_zero_values: false,
        }
    }
}

impl RxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, RxError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| RxError::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_match_documented_limits() {
        let config = RxConfig::default();
        assert_eq!(config.extraction.max_file_size_mb, 50);
        assert_eq!(config.extraction.min_content_length, 10);
        assert_eq!(config.extraction.preview_length, 200);
        assert_eq!(config.parser.min_line_length, 5);
        assert_eq!(config.parser.max_items, 50);
        assert!(!config.parser.keep_zero_values);
        assert_eq!(config.provider.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"parser": {{"max_items": 10}}}}"#).unwrap();

        let config = RxConfig::from_file(file.path()).unwrap();
        assert_eq!(config.parser.max_items, 10);
        assert_eq!(config.parser.min_line_length, 5);
        assert_eq!(config.extraction.max_file_size_mb, 50);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = RxConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, RxError::Config(_)));
    }
}
