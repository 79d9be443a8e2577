//! Third fallback stage: the two-hop GitHub bridge.
//!
//! Developers often leave their email on a public GitHub profile under a
//! display name that is far easier to search for than the address
//! itself. The hops: locate a GitHub profile for the address, extract
//! the owner's display name from the page, then search LinkedIn by that
//! name.

use crate::stage::{ResolveStage, StageOutcome};
use crate::{matching, queries};
use async_trait::async_trait;
use mailscope_core::{EmailAddress, ProfileDetails, ProfileRecord, ProfileSource};
use mailscope_scraper::NameExtractor;
use mailscope_search::SearchProvider;
use std::sync::Arc;

/// Bridges email → GitHub profile → display name → LinkedIn profile.
pub struct GithubBridgeStage {
    search: Arc<dyn SearchProvider>,
    extractor: Arc<dyn NameExtractor>,
}

impl GithubBridgeStage {
    /// Create the stage around a search provider and a name extractor.
    #[must_use]
    pub fn new(search: Arc<dyn SearchProvider>, extractor: Arc<dyn NameExtractor>) -> Self {
        Self { search, extractor }
    }

    /// Hop one: find a GitHub profile URL for the address.
    async fn find_github_profile(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<String>, String> {
        for query in queries::github_queries(email) {
            let items = self
                .search
                .search(&query)
                .await
                .map_err(|e| e.to_string())?;

            if let Some(url) = matching::find_github_url(&items) {
                tracing::debug!("GitHub lookup matched {url} for {email}");
                return Ok(Some(url));
            }
        }

        Ok(None)
    }

    /// Hop three: find a LinkedIn profile for the extracted name.
    async fn find_linkedin_by_name(&self, name: &str) -> Result<Option<String>, String> {
        for query in queries::linkedin_by_name_queries(name) {
            let items = self
                .search
                .search(&query)
                .await
                .map_err(|e| e.to_string())?;

            if let Some(url) = matching::find_linkedin_url(&items) {
                tracing::debug!("Name search matched {url} for '{name}'");
                return Ok(Some(url));
            }
        }

        Ok(None)
    }
}

#[async_trait]
impl ResolveStage for GithubBridgeStage {
    fn name(&self) -> &'static str {
        "github-bridge"
    }

    fn source(&self) -> ProfileSource {
        ProfileSource::GithubBridge
    }

    async fn attempt(&self, email: &EmailAddress) -> StageOutcome {
        let github_url = match self.find_github_profile(email).await {
            Ok(Some(url)) => url,
            Ok(None) => return StageOutcome::miss(),
            Err(message) => return StageOutcome::Unavailable { message },
        };

        let Some(name) = self.extractor.extract_name(&github_url).await else {
            tracing::debug!("GitHub profile {github_url} yielded no name for {email}");
            return StageOutcome::miss();
        };

        match self.find_linkedin_by_name(&name).await {
            Ok(Some(url)) => {
                let details = ProfileDetails {
                    name: Some(name),
                    ..ProfileDetails::linkedin_only(url)
                };
                match ProfileRecord::resolved(email, self.source(), details) {
                    Ok(record) => StageOutcome::Resolved(record),
                    Err(e) => {
                        tracing::warn!("Discarding unusable bridge match for {email}: {e}");
                        StageOutcome::miss()
                    }
                }
            }
            // The name survives on the negative record for diagnostics.
            Ok(None) => StageOutcome::Miss {
                partial_name: Some(name),
            },
            Err(message) => StageOutcome::Unavailable { message },
        }
    }
}
