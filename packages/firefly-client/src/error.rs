//! Error types for the Firefly client.

use thiserror::Error;

/// Result type for Firefly operations.
pub type Result<T> = std::result::Result<T, FireflyError>;

/// Firefly client errors.
#[derive(Debug, Error)]
pub enum FireflyError {
    /// Transport failure or invalid response body
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success API response
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}
