//! Error types for the charts client.

use thiserror::Error;

/// Errors that can occur when fetching chart or artist data.
#[derive(Error, Debug)]
pub enum ChartsError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an in-band API error
    #[error("API error ({code}): {message}")]
    Api { code: u32, message: String },

    /// Service returned a non-success HTTP status
    #[error("Service error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Invalid service URL
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse service response
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Result type for charts client operations.
pub type Result<T> = std::result::Result<T, ChartsError>;
