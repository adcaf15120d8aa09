//! Document extraction providers.
//!
//! A provider opens a file and hands back an [`ExtractedDocument`], which can
//! be rendered into the output formats the extraction adapter tries in turn.

#[cfg(feature = "cloud")]
mod cloud;
mod local;

#[cfg(feature = "cloud")]
pub use cloud::CloudProvider;
pub use local::{LocalDocument, LocalProvider};

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// How documents are processed, reported back in the output as `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMode {
    /// Cloud processing with an API key (higher quota).
    CloudAuthenticated,
    /// Anonymous cloud processing.
    CloudFree,
    /// Offline text extraction.
    Local,
}

impl ProcessingMode {
    /// Pick the cloud mode for an optional API key. Empty keys count as absent.
    pub fn for_api_key(api_key: Option<&str>) -> Self {
        match api_key {
            Some(key) if !key.is_empty() => Self::CloudAuthenticated,
            _ => Self::CloudFree,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CloudAuthenticated => "cloud_authenticated",
            Self::CloudFree => "cloud_free",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for document extraction providers.
pub trait DocumentProvider {
    /// Processing mode this provider runs in.
    fn mode(&self) -> ProcessingMode;

    /// Open a document for extraction.
    fn open(&self, path: &Path) -> Result<Box<dyn ExtractedDocument>>;
}

/// A document opened by a provider.
pub trait ExtractedDocument {
    /// Render the document as markdown.
    fn markdown(&self) -> Result<String>;

    /// Render the document as plain text.
    fn text(&self) -> Result<String>;

    /// Render the document as HTML.
    fn html(&self) -> Result<String>;

    /// Extract structured data, restricted to `fields` when given.
    fn fields(&self, fields: Option<&[&str]>) -> Result<serde_json::Value>;
}
