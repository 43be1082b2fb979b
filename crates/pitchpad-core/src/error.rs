//! Error types for pitchpad-core

use thiserror::Error;

/// Result type alias using pitchpad-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pitchpad-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Store API rejected the request
    #[error("Store API error: {0}")]
    Api(String),
}
