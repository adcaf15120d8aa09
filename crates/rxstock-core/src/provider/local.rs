//! Offline provider: plain text extraction using lopdf and pdf-extract.

use std::fs;
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::{DocumentProvider, ExtractedDocument, ProcessingMode, Result};
use crate::error::ProviderError;

/// Provider that extracts embedded PDF text without any network access.
///
/// Only plain text is available; the other renderings report
/// [`ProviderError::Unsupported`] so the adapter moves on.
#[derive(Debug, Default)]
pub struct LocalProvider;

impl LocalProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentProvider for LocalProvider {
    fn mode(&self) -> ProcessingMode {
        ProcessingMode::Local
    }

    fn open(&self, path: &Path) -> Result<Box<dyn ExtractedDocument>> {
        let data = fs::read(path)?;
        Ok(Box::new(LocalDocument::load(&data)?))
    }
}

/// A PDF loaded into memory.
pub struct LocalDocument {
    raw_data: Vec<u8>,
}

impl LocalDocument {
    /// Parse a PDF from bytes.
    pub fn load(data: &[u8]) -> Result<Self> {
        let mut doc = Document::load_mem(data).map_err(|e| ProviderError::Pdf(e.to_string()))?;

        // pdf-extract cannot read encrypted files, so hand it the decrypted copy
        let raw_data = if doc.is_encrypted() {
            doc.decrypt("")
                .map_err(|_| ProviderError::Pdf("PDF is encrypted".to_string()))?;
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| ProviderError::Pdf(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(ProviderError::Pdf("PDF has no pages".to_string()));
        }

        debug!("Loaded PDF with {} pages", page_count);
        Ok(Self { raw_data })
    }
}

impl ExtractedDocument for LocalDocument {
    fn markdown(&self) -> Result<String> {
        Err(ProviderError::Unsupported("markdown"))
    }

    fn text(&self) -> Result<String> {
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| ProviderError::Pdf(e.to_string()))
    }

    fn html(&self) -> Result<String> {
        Err(ProviderError::Unsupported("HTML"))
    }

    fn fields(&self, _fields: Option<&[&str]>) -> Result<serde_json::Value> {
        Err(ProviderError::Unsupported("structured"))
    }
}
