//! Error types for the textsim similarity engine.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for textsim operations.
///
/// The scoring operations themselves are infallible: degenerate input
/// degrades to a similarity of 0 rather than an error. Errors arise only
/// from configuration validation and from I/O in the CLI.
#[derive(Error, Debug)]
pub enum TextSimError {
    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for textsim operations.
pub type Result<T> = std::result::Result<T, TextSimError>;

impl From<serde_json::Error> for TextSimError {
    fn from(err: serde_json::Error) -> Self {
        TextSimError::Serialization(err.to_string())
    }
}
