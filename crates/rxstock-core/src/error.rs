//! Error types for the rxstock-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the rxstock library.
#[derive(Error, Debug)]
pub enum RxError {
    /// Input file problem detected before extraction.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Extraction provider error.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Problems with the input file itself.
#[derive(Error, Debug)]
pub enum InputError {
    /// The file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exceeds the configured size cap.
    #[error("File too large ({size_mb:.2} MB). Maximum size is {limit_mb}MB.")]
    TooLarge { size_mb: f64, limit_mb: u64 },
}

/// Errors raised by document providers.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Provider could not be constructed.
    #[error("failed to initialize provider: {0}")]
    Init(String),

    /// Request to the provider failed before a response arrived.
    #[error("request failed: {0}")]
    Request(String),

    /// Provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Provider response could not be interpreted.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// The provider cannot produce this output format.
    #[error("{0} output is not supported by this provider")]
    Unsupported(&'static str),

    /// Local PDF handling failed.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// I/O error while reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the rxstock library.
pub type Result<T> = std::result::Result<T, RxError>;
