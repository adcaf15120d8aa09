//! Core library for pharmaceutical stock statement extraction.
//!
//! This crate provides:
//! - Document providers (cloud extraction service, local PDF text)
//! - An extraction adapter that tries markdown, text, HTML and structured output in turn
//! - A line parser that turns extracted text into pharmaceutical inventory items
//! - A service tying both together into a JSON-serializable report

pub mod error;
pub mod models;
pub mod provider;
pub mod extraction;
pub mod inventory;
pub mod service;

pub use error::{InputError, ProviderError, Result, RxError};
pub use models::config::RxConfig;
pub use models::item::PharmaItem;
pub use provider::{DocumentProvider, ExtractedDocument, LocalProvider, ProcessingMode};
#[cfg(feature = "cloud")]
pub use provider::CloudProvider;
pub use extraction::{ExtractionResult, TextExtraction};
pub use inventory::{is_valid_medicine_name, PharmaLineParser};
pub use service::{ExtractionReport, PharmaDataExtractor};
