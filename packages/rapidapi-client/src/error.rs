//! Error types for the RapidAPI client.

use thiserror::Error;

/// Result type for RapidAPI operations.
pub type Result<T> = std::result::Result<T, RapidApiError>;

/// RapidAPI client errors.
#[derive(Debug, Error)]
pub enum RapidApiError {
    /// Transport failure or invalid response body
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success API response
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}
