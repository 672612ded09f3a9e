//! Typed errors for the persona engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on what actually failed. Foreign causes travel as boxed sources.

use thiserror::Error;

/// Errors that abort an import or chat run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The handle did not resolve to any account
    #[error("no account found for handle {handle:?}")]
    AccountNotFound { handle: String },

    /// Another import for the same persona is already running
    #[error("an import for {persona:?} is already in progress")]
    ImportInProgress { persona: String },

    /// Identity lookup transport failure
    #[error("identity lookup failed: {0}")]
    Identity(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Link discovery transport failure
    #[error("link discovery failed: {0}")]
    LinkDiscovery(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Embedding service failure
    #[error("embedding error: {0}")]
    Embedding(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Chat completion failure
    #[error("completion error: {0}")]
    Completion(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Content store failure
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Persona registry failure
    #[error("registry error: {0}")]
    Registry(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from a single timeline page request.
///
/// These never abort an import: the fetch loop stops at the failed page and
/// keeps what it already has.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-success response from the timeline API
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected shape
    #[error("malformed page: {0}")]
    Malformed(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Result type alias for timeline page requests.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
