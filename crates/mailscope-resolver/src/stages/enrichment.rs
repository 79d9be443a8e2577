//! First fallback stage: the paid enrichment API.

use crate::stage::{ResolveStage, StageOutcome};
use async_trait::async_trait;
use mailscope_core::{EmailAddress, ProfileRecord, ProfileSource};
use mailscope_enrichment::{EnrichmentOutcome, EnrichmentProvider};
use std::sync::Arc;

/// Resolves an address through the enrichment provider.
pub struct EnrichmentStage {
    provider: Arc<dyn EnrichmentProvider>,
}

impl EnrichmentStage {
    /// Create the stage around an enrichment provider.
    #[must_use]
    pub fn new(provider: Arc<dyn EnrichmentProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ResolveStage for EnrichmentStage {
    fn name(&self) -> &'static str {
        "enrichment"
    }

    fn source(&self) -> ProfileSource {
        ProfileSource::EnrichmentApi
    }

    async fn attempt(&self, email: &EmailAddress) -> StageOutcome {
        match self.provider.enrich(email).await {
            Ok(EnrichmentOutcome::Found(details)) => {
                match ProfileRecord::resolved(email, self.source(), details) {
                    Ok(record) => StageOutcome::Resolved(record),
                    Err(e) => {
                        tracing::warn!("Discarding unusable enrichment result for {email}: {e}");
                        StageOutcome::miss()
                    }
                }
            }
            Ok(EnrichmentOutcome::NotFound) => StageOutcome::miss(),
            Err(e) => StageOutcome::Unavailable {
                message: e.to_string(),
            },
        }
    }
}
