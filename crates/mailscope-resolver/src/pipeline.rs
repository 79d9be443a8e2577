//! The staged resolution pipeline.
//!
//! A pipeline owns a cache store and an ordered list of stages. Each
//! lookup consults the cache first; on a miss the stages run in order
//! until one resolves. Whatever the outcome, the result is written back
//! so the next lookup for the same address is free.

use crate::error::{ResolveError, Result};
use crate::stage::{ResolveStage, StageOutcome};
use crate::stages::{DirectSearchStage, EnrichmentStage, GithubBridgeStage};
use mailscope_core::{AppConfig, EmailAddress, ProfileRecord, ProfileSource};
use mailscope_db::LookupStore;
use mailscope_enrichment::EnrichmentClient;
use mailscope_scraper::ProfileScraper;
use mailscope_search::{SearchProvider, WebSearchClient};
use std::sync::Arc;

/// Cache-fronted, multi-stage email resolution.
pub struct ResolutionPipeline {
    store: Arc<dyn LookupStore>,
    stages: Vec<Box<dyn ResolveStage>>,
}

impl ResolutionPipeline {
    /// Assemble a pipeline from pre-built stages.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotConfigured`] when `stages` is empty;
    /// a pipeline with no stages could only ever answer from cache.
    pub fn new(store: Arc<dyn LookupStore>, stages: Vec<Box<dyn ResolveStage>>) -> Result<Self> {
        if stages.is_empty() {
            return Err(ResolveError::NotConfigured(
                "no API credentials available for any resolution stage".to_string(),
            ));
        }

        let names: Vec<&str> = stages.iter().map(|s| s.name()).collect();
        tracing::info!("Resolution pipeline ready with stages: {}", names.join(", "));

        Ok(Self { store, stages })
    }

    /// Build the standard pipeline from configuration.
    ///
    /// Stages whose credentials are missing are skipped with a warning;
    /// the search-backed stages share a single throttled client.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotConfigured`] when no stage has
    /// credentials, or [`ResolveError::StageSetup`] when an HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig, store: Arc<dyn LookupStore>) -> Result<Self> {
        let mut stages: Vec<Box<dyn ResolveStage>> = Vec::new();

        if let Some(api_key) = &config.enrichment.api_key {
            let client = EnrichmentClient::new(api_key, &config.enrichment)
                .map_err(|e| ResolveError::StageSetup(e.to_string()))?;
            stages.push(Box::new(EnrichmentStage::new(Arc::new(client))));
        } else {
            tracing::warn!("Enrichment API key not set; skipping the enrichment stage");
        }

        match (&config.search.api_key, &config.search.scope_id) {
            (Some(api_key), Some(scope_id)) => {
                let client = WebSearchClient::new(api_key, scope_id, &config.search)
                    .map_err(|e| ResolveError::StageSetup(e.to_string()))?;
                let search: Arc<dyn SearchProvider> = Arc::new(client);
                stages.push(Box::new(DirectSearchStage::new(Arc::clone(&search))));

                let scraper = ProfileScraper::new(config.search.timeout_secs)
                    .map_err(|e| ResolveError::StageSetup(e.to_string()))?;
                stages.push(Box::new(GithubBridgeStage::new(search, Arc::new(scraper))));
            }
            _ => {
                tracing::warn!(
                    "Search API key or scope id not set; skipping the search-backed stages"
                );
            }
        }

        Self::new(store, stages)
    }

    /// Stage names in execution order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Resolve one address to a profile record.
    ///
    /// Never fails: stage errors fall through to the next stage and
    /// exhausting every stage produces a negative record. Cache hits,
    /// positive or negative, short-circuit the stages entirely.
    pub async fn resolve(&self, email: &EmailAddress) -> ProfileRecord {
        match self.store.get(email).await {
            Ok(Some(record)) => {
                tracing::debug!("Cache hit for {email} (found: {})", record.found);
                return record.as_cache_hit();
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Cache read failed for {email}: {e}; resolving anyway");
            }
        }

        let record = self.run_stages(email).await;

        match self.store.put(&record).await {
            Ok(true) => tracing::debug!("Cached result for {email}"),
            Ok(false) => {
                tracing::debug!("Result for {email} was already cached by a concurrent lookup");
            }
            Err(e) => tracing::warn!("Failed to cache result for {email}: {e}"),
        }

        if record.found {
            tracing::info!("Resolved {email} via {}", record.source);
        } else {
            tracing::info!("No profile found for {email}");
        }

        record
    }

    async fn run_stages(&self, email: &EmailAddress) -> ProfileRecord {
        let mut last_source = None;
        let mut partial_name: Option<String> = None;

        for stage in &self.stages {
            last_source = Some(stage.source());
            tracing::debug!("Running stage '{}' for {email}", stage.name());

            match stage.attempt(email).await {
                StageOutcome::Resolved(record) => return record,
                StageOutcome::Miss { partial_name: name } => {
                    if name.is_some() {
                        partial_name = name;
                    }
                }
                StageOutcome::Unavailable { message } => {
                    tracing::warn!("Stage '{}' unavailable for {email}: {message}", stage.name());
                }
            }
        }

        // new() rejects empty stage lists, so a source was always recorded.
        let source = last_source.unwrap_or(ProfileSource::EnrichmentApi);
        match partial_name {
            Some(name) => ProfileRecord::not_found_with_name(email, source, name),
            None => ProfileRecord::not_found(email, source),
        }
    }
}
