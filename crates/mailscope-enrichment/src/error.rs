//! Error types for the enrichment client.

use thiserror::Error;

/// Errors that can occur while querying the enrichment API.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    /// API returned a non-success status that is not a "no record" reply.
    #[error("enrichment API error: status {status}, {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message body
        message: String,
    },

    /// Response body could not be parsed.
    #[error("failed to parse enrichment response: {0}")]
    Parse(String),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for enrichment operations.
pub type Result<T> = std::result::Result<T, EnrichmentError>;
