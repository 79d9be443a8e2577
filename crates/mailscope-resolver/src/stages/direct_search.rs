//! Second fallback stage: direct email-based web search for a LinkedIn
//! profile.

use crate::stage::{ResolveStage, StageOutcome};
use crate::{matching, queries};
use async_trait::async_trait;
use mailscope_core::{EmailAddress, ProfileDetails, ProfileRecord, ProfileSource};
use mailscope_search::SearchProvider;
use std::sync::Arc;

/// Searches for the raw email address and recognizes LinkedIn profile
/// URLs in the results.
pub struct DirectSearchStage {
    search: Arc<dyn SearchProvider>,
}

impl DirectSearchStage {
    /// Create the stage around a search provider.
    #[must_use]
    pub fn new(search: Arc<dyn SearchProvider>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl ResolveStage for DirectSearchStage {
    fn name(&self) -> &'static str {
        "direct-search"
    }

    fn source(&self) -> ProfileSource {
        ProfileSource::DirectSearch
    }

    async fn attempt(&self, email: &EmailAddress) -> StageOutcome {
        for query in queries::direct_linkedin_queries(email) {
            let items = match self.search.search(&query).await {
                Ok(items) => items,
                // A provider failure poisons the remaining templates too;
                // don't burn quota on them.
                Err(e) => {
                    return StageOutcome::Unavailable {
                        message: e.to_string(),
                    }
                }
            };

            if let Some(url) = matching::find_linkedin_url(&items) {
                tracing::debug!("Direct search matched {url} for {email}");
                match ProfileRecord::resolved(
                    email,
                    self.source(),
                    ProfileDetails::linkedin_only(url),
                ) {
                    Ok(record) => return StageOutcome::Resolved(record),
                    Err(e) => {
                        tracing::warn!("Discarding unusable search match for {email}: {e}");
                    }
                }
            }
        }

        StageOutcome::miss()
    }
}
