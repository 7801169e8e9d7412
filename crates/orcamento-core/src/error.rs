//! Error types for the orcamento-core library.

use thiserror::Error;

/// Main error type for the orcamento library.
///
/// Parsing and rendering never fail; these cover the ambient operations
/// around them (configuration files, JSON encoding).
#[derive(Error, Debug)]
pub enum OrcamentoError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the orcamento library.
pub type Result<T> = std::result::Result<T, OrcamentoError>;
