//! Custom error types for herald with improved type safety and error handling.

use thiserror::Error;

/// Main error type for herald operations.
#[derive(Error, Debug)]
pub enum HeraldError {
    // Input validation errors
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    // URL construction errors
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using HeraldError
pub type Result<T> = std::result::Result<T, HeraldError>;

impl HeraldError {
    /// Create a missing required input error
    pub fn missing_input(name: &'static str) -> Self {
        Self::MissingInput(name)
    }
}
