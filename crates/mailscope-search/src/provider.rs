//! Provider trait for web search.

use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// One ranked result from a search response.
///
/// Absent payload fields normalize to empty strings here, so downstream
/// matching never deals with optionality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchResultItem {
    /// Result title
    pub title: String,
    /// Result URL
    pub link: String,
    /// Result snippet text
    pub snippet: String,
}

impl SearchResultItem {
    /// Convenience constructor, mostly for tests.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
        }
    }
}

/// Trait for services that answer a query with ranked result items.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one query and return its result page.
    ///
    /// An empty result page is `Ok(vec![])`; errors mean the provider
    /// itself failed (auth, quota, transport) rather than "nothing found".
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>>;
}
