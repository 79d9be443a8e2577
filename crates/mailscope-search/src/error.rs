//! Error types for the search client.

use thiserror::Error;

/// Errors that can occur while querying the search provider.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Provider returned a non-success status (auth, quota, bad request).
    #[error("search API error: status {status}, {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message body
        message: String,
    },

    /// Response body could not be parsed.
    #[error("failed to parse search response: {0}")]
    Parse(String),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
