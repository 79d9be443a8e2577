//! Error types for the profile scraper.

use thiserror::Error;

/// Errors that can occur while setting up the scraper.
///
/// Extraction itself never errors: a page that cannot be fetched or
/// parsed simply yields no name.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP client construction failed.
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
