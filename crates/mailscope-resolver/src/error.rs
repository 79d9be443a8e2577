//! Error types for the resolution pipeline.
//!
//! Only pipeline *assembly* can fail. A resolution call itself always
//! produces a record: stage failures fall through and exhaustion yields
//! a negative result.

use thiserror::Error;

/// Errors that can occur while assembling the pipeline.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No stage could be configured at all.
    #[error("no resolution stage is configured: {0}")]
    NotConfigured(String),

    /// A stage's client could not be constructed.
    #[error("failed to build stage client: {0}")]
    StageSetup(String),
}

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResolveError::NotConfigured("missing every API key".to_string());
        assert_eq!(
            err.to_string(),
            "no resolution stage is configured: missing every API key"
        );
    }
}
