//! Error types for leaf-core

use thiserror::Error;

/// Result type alias using leaf-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in leaf-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The notes API answered with a non-success status
    #[error("Notes API error: {message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
