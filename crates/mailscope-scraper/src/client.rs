//! Profile-page fetcher.
//!
//! Fetches a public profile page once and runs the extraction chain on
//! its HTML. Every failure mode (network, non-2xx, unreadable body)
//! yields `None` rather than an error.

use crate::error::Result;
use crate::extract;
use crate::provider::NameExtractor;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches profile pages and extracts display names.
pub struct ProfileScraper {
    client: Client,
}

impl ProfileScraper {
    /// Create a new scraper with the given per-request timeout.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("mailscope/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    async fn fetch_page(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Profile fetch failed for {url}: {e}");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Profile fetch for {url} returned status {status}");
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::debug!("Profile body unreadable for {url}: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl NameExtractor for ProfileScraper {
    async fn extract_name(&self, profile_url: &str) -> Option<String> {
        let html = self.fetch_page(profile_url).await?;
        let name = extract::extract_name_from_html(&html, profile_url);

        match &name {
            Some(name) => tracing::debug!("Extracted name '{name}' from {profile_url}"),
            None => tracing::debug!("No name found on {profile_url}"),
        }

        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraper_creation() {
        assert!(ProfileScraper::new(10).is_ok());
    }
}
