//! Extraction adapter: turn a provider document into a single text block.
//!
//! Output formats are tried in a fixed order (markdown, text, HTML, then
//! structured data) and the first one that yields enough text wins.

use std::path::Path;

use tracing::{info, warn};

use crate::error::{InputError, ProviderError};
use crate::models::config::ExtractionConfig;
use crate::provider::ExtractedDocument;

/// Field names requested from structured extraction.
pub const PHARMA_FIELDS: &[&str] = &[
    "medicine_name",
    "drug_name",
    "item_name",
    "product_name",
    "opening_quantity",
    "opening_qty",
    "opening_stock",
    "purchase_quantity",
    "purchase_qty",
    "purchased",
    "sales_quantity",
    "sales_qty",
    "sold",
    "closing_quantity",
    "closing_qty",
    "closing_stock",
    "sales_value",
    "sales_amount",
    "total_value",
    "unit_price",
    "rate",
    "amount",
];

/// A single extraction strategy.
pub type ExtractionMethod = fn(&dyn ExtractedDocument) -> Result<String, ProviderError>;

/// Extraction strategies in priority order.
pub const METHODS: &[(&str, ExtractionMethod)] = &[
    ("Markdown", extract_markdown),
    ("Text", extract_text),
    ("HTML", extract_html),
    ("JSON Data", extract_structured_data),
];

fn extract_markdown(document: &dyn ExtractedDocument) -> Result<String, ProviderError> {
    document.markdown()
}

fn extract_text(document: &dyn ExtractedDocument) -> Result<String, ProviderError> {
    document.text()
}

fn extract_html(document: &dyn ExtractedDocument) -> Result<String, ProviderError> {
    document.html()
}

/// Text produced by a successful extraction method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextExtraction {
    pub text: String,
    /// Lowercased name of the method that produced the text.
    pub method: String,
}

/// Outcome of running the extraction methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Success(TextExtraction),
    Failure(String),
}

impl ExtractionResult {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(error.into())
    }
}

/// Check that the input exists and is within the size cap.
///
/// Runs before any provider call.
pub fn check_input(path: &Path, config: &ExtractionConfig) -> Result<f64, InputError> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(_) => return Err(InputError::NotFound(path.to_path_buf())),
    };

    let size_mb = metadata.len() as f64 / (1024.0 * 1024.0);
    if size_mb > config.max_file_size_mb as f64 {
        return Err(InputError::TooLarge {
            size_mb,
            limit_mb: config.max_file_size_mb,
        });
    }

    Ok(size_mb)
}

/// Try each method in order and return the first sufficient result.
pub fn try_extraction_methods(
    document: &dyn ExtractedDocument,
    config: &ExtractionConfig,
) -> ExtractionResult {
    try_methods(METHODS, document, config.min_content_length)
}

/// Run `methods` in order with first-success semantics.
pub fn try_methods(
    methods: &[(&str, ExtractionMethod)],
    document: &dyn ExtractedDocument,
    min_content_length: usize,
) -> ExtractionResult {
    for (name, method) in methods {
        info!("Trying {} extraction...", name);

        match method(document) {
            Ok(content) if content.trim().chars().count() > min_content_length => {
                info!("{} extraction successful", name);
                return ExtractionResult::Success(TextExtraction {
                    text: content,
                    method: name.to_lowercase(),
                });
            }
            Ok(_) => warn!("{} extraction returned insufficient data", name),
            Err(e) => warn!("{} extraction failed: {}", name, e),
        }
    }

    ExtractionResult::failure("All extraction methods failed to return sufficient data")
}

/// Structured extraction, serialized as pretty JSON.
///
/// Requests the pharmaceutical field list first and falls back to an
/// unconstrained extraction. Never fails: errors produce an empty string.
pub fn extract_structured_data(document: &dyn ExtractedDocument) -> Result<String, ProviderError> {
    info!("Attempting pharmaceutical field extraction...");

    let specified = match document.fields(Some(PHARMA_FIELDS)) {
        Ok(value) => value,
        Err(e) => {
            warn!("Structured extraction failed: {}", e);
            return Ok(String::new());
        }
    };

    if specified.as_object().is_some_and(|map| !map.is_empty()) {
        return Ok(to_pretty(&specified));
    }

    info!("Falling back to general JSON extraction...");
    match document.fields(None) {
        Ok(general) if is_truthy(&general) => Ok(to_pretty(&general)),
        Ok(_) => Ok(String::new()),
        Err(e) => {
            warn!("Structured extraction failed: {}", e);
            Ok(String::new())
        }
    }
}

fn to_pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Empty containers, empty strings, zero, `false` and `null` count as no data.
fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
