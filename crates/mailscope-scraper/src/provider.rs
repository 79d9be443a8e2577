//! Provider trait for display-name extraction.

use async_trait::async_trait;

/// Trait for services that recover a person's display name from a
/// public profile page.
#[async_trait]
pub trait NameExtractor: Send + Sync {
    /// Fetch the page at `profile_url` and extract a display name.
    ///
    /// Returns `None` when the page cannot be fetched or no strategy
    /// yields a usable name; extraction is best-effort and never errors.
    async fn extract_name(&self, profile_url: &str) -> Option<String>;
}
