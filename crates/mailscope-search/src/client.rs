//! Custom Search-style JSON API client.
//!
//! Issues `GET {base}?key=...&cx=...&q=...&num=...` and decodes the
//! ranked result items. A shared [`Throttle`] spaces every outbound call.

use crate::error::{Result, SearchError};
use crate::provider::{SearchProvider, SearchResultItem};
use crate::throttle::Throttle;
use async_trait::async_trait;
use mailscope_core::SearchConfig;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// HTTP client for the web-search API.
pub struct WebSearchClient {
    api_key: String,
    scope_id: String,
    base_url: String,
    page_size: u32,
    throttle: Throttle,
    client: Client,
}

impl WebSearchClient {
    /// Create a new client with the given credentials and settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(
        api_key: impl Into<String>,
        scope_id: impl Into<String>,
        config: &SearchConfig,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_key: api_key.into(),
            scope_id: scope_id.into(),
            base_url: config.base_url.clone(),
            page_size: config.page_size.clamp(1, 10),
            throttle: Throttle::new(Duration::from_millis(config.min_interval_ms)),
            client,
        })
    }
}

#[async_trait]
impl SearchProvider for WebSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>> {
        self.throttle.wait().await;
        tracing::debug!("Search query: {query}");

        let page_size = self.page_size.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.scope_id.as_str()),
                ("q", query),
                ("num", page_size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let payload: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("invalid response body: {e}")))?;

        if let Some(total) = payload
            .search_information
            .and_then(|info| info.total_results)
        {
            tracing::debug!(total_results = %total, "Search response metadata");
        }

        tracing::debug!("Search returned {} items", payload.items.len());
        Ok(payload.items)
    }
}

// Search API types

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchResultItem>,
    #[serde(default, rename = "searchInformation")]
    search_information: Option<SearchInformation>,
}

#[derive(Debug, Deserialize)]
struct SearchInformation {
    // The provider reports this count as a JSON string.
    #[serde(default, rename = "totalResults")]
    total_results: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = SearchConfig::default();
        let client = WebSearchClient::new("key", "cx", &config).expect("create client");
        assert_eq!(client.base_url, "https://www.googleapis.com/customsearch/v1");
        assert_eq!(client.page_size, 10);
    }

    #[test]
    fn test_page_size_capped_at_provider_limit() {
        let config = SearchConfig {
            page_size: 50,
            ..SearchConfig::default()
        };
        let client = WebSearchClient::new("key", "cx", &config).expect("create client");
        assert_eq!(client.page_size, 10);
    }

    #[test]
    fn test_page_size_zero_raised_to_one() {
        let config = SearchConfig {
            page_size: 0,
            ..SearchConfig::default()
        };
        let client = WebSearchClient::new("key", "cx", &config).expect("create client");
        assert_eq!(client.page_size, 1);
    }

    #[test]
    fn test_response_decoding() {
        let payload: SearchResponse = serde_json::from_str(
            r#"{
                "searchInformation": {"totalResults": "1420"},
                "items": [
                    {
                        "title": "Jane Doe - Staff Engineer - Example Corp | LinkedIn",
                        "link": "https://www.linkedin.com/in/janedoe",
                        "snippet": "Jane Doe. Staff Engineer at Example Corp."
                    },
                    {
                        "title": "Untitled",
                        "link": "https://example.com/other"
                    }
                ]
            }"#,
        )
        .expect("parse response");

        assert_eq!(payload.items.len(), 2);
        assert_eq!(payload.items[0].link, "https://www.linkedin.com/in/janedoe");
        assert_eq!(payload.items[1].snippet, "");
        assert_eq!(
            payload
                .search_information
                .and_then(|i| i.total_results)
                .as_deref(),
            Some("1420")
        );
    }

    #[test]
    fn test_empty_response_is_empty_items() {
        let payload: SearchResponse = serde_json::from_str("{}").expect("parse response");
        assert!(payload.items.is_empty());
    }
}
