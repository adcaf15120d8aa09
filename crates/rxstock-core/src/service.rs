//! End-to-end extraction: input checks, provider rendering, line parsing.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, error, info};

use crate::error::{Result, RxError};
use crate::extraction::{check_input, try_extraction_methods, ExtractionResult};
use crate::inventory::PharmaLineParser;
use crate::models::config::RxConfig;
use crate::models::item::PharmaItem;
use crate::provider::{DocumentProvider, ProcessingMode};

/// Successful extraction output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessReport {
    pub success: bool,
    /// Parsed inventory items.
    pub data: Vec<PharmaItem>,
    pub mode: ProcessingMode,
    /// Length of the extracted text in characters.
    pub extracted_text_length: usize,
    /// Leading part of the extracted text, suffixed with `...` when cut.
    pub text_preview: String,
}

/// Failed extraction output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureReport {
    pub success: bool,
    pub error: String,
}

/// JSON document printed for every invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractionReport {
    Success(SuccessReport),
    Failure(FailureReport),
}

impl ExtractionReport {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(FailureReport {
            success: false,
            error: error.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Error message for failed reports.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(f) => Some(&f.error),
        }
    }
}

/// Pharmaceutical data extractor bound to one provider.
pub struct PharmaDataExtractor {
    provider: Box<dyn DocumentProvider>,
    parser: PharmaLineParser,
    config: RxConfig,
}

impl PharmaDataExtractor {
    pub fn new(provider: Box<dyn DocumentProvider>, config: RxConfig) -> Self {
        Self {
            provider,
            parser: PharmaLineParser::from_config(&config.parser),
            config,
        }
    }

    pub fn mode(&self) -> ProcessingMode {
        self.provider.mode()
    }

    /// Extract pharmaceutical items from a document.
    ///
    /// Never fails: every error is folded into a failure report.
    pub fn extract_pharmaceutical_data(&self, path: &Path) -> ExtractionReport {
        match self.try_extract(path) {
            Ok(report) => report,
            Err(RxError::Input(e)) => ExtractionReport::failure(e.to_string()),
            Err(e) => {
                error!("Document extraction failed: {}", e);
                let mut source = std::error::Error::source(&e);
                while let Some(cause) = source {
                    debug!("caused by: {}", cause);
                    source = cause.source();
                }
                ExtractionReport::failure(format!("Document extraction failed: {}", e))
            }
        }
    }

    fn try_extract(&self, path: &Path) -> Result<ExtractionReport> {
        let size_mb = check_input(path, &self.config.extraction)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        info!("Processing file: {} ({:.2} MB)", file_name, size_mb);

        info!("Starting {} extraction...", self.mode());
        let document = self.provider.open(path)?;

        let extraction = match try_extraction_methods(document.as_ref(), &self.config.extraction) {
            ExtractionResult::Success(extraction) => extraction,
            ExtractionResult::Failure(error) => return Ok(ExtractionReport::failure(error)),
        };
        debug!("Using {} output", extraction.method);

        let data = self.parser.parse(&extraction.text);

        Ok(ExtractionReport::Success(SuccessReport {
            success: true,
            data,
            mode: self.mode(),
            extracted_text_length: extraction.text.chars().count(),
            text_preview: preview(&extraction.text, self.config.extraction.preview_length),
        }))
    }
}

/// First `limit` characters of `text`, with `...` appended when cut.
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
