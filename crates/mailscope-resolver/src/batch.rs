//! Concurrent resolution of email batches.
//!
//! Input is processed in chunks, with a bounded number of in-flight
//! lookups per chunk. Per-address failures never abort the batch; each
//! address independently ends up with a positive or negative record.

use crate::pipeline::ResolutionPipeline;
use futures::stream::{FuturesUnordered, StreamExt};
use mailscope_core::{EmailAddress, ProfileRecord, ResolverConfig};
use std::collections::HashMap;
use std::sync::Arc;

/// Default number of lookups in flight at once.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default chunk size for batch processing.
const DEFAULT_CHUNK_SIZE: usize = 10;

/// Drives a pipeline over many addresses with bounded concurrency.
pub struct BatchCoordinator {
    pipeline: Arc<ResolutionPipeline>,
    max_concurrent: usize,
    chunk_size: usize,
}

impl BatchCoordinator {
    /// Create a coordinator with the default limits.
    #[must_use]
    pub fn new(pipeline: Arc<ResolutionPipeline>) -> Self {
        Self {
            pipeline,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a coordinator with limits taken from configuration.
    #[must_use]
    pub fn from_config(config: &ResolverConfig, pipeline: Arc<ResolutionPipeline>) -> Self {
        Self::new(pipeline)
            .with_max_concurrent(config.max_concurrent)
            .with_chunk_size(config.batch_chunk_size)
    }

    /// Override the in-flight lookup limit. Clamped to at least 1.
    #[must_use]
    pub fn with_max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent = max.max(1);
        self
    }

    /// Override the chunk size. Clamped to at least 1.
    #[must_use]
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }

    /// Resolve every address, keyed by the address string.
    ///
    /// Duplicate inputs collapse to a single entry; concurrent lookups
    /// for the same address are safe because the store ignores insert
    /// conflicts.
    pub async fn resolve_all(&self, emails: &[EmailAddress]) -> HashMap<String, ProfileRecord> {
        let mut results = HashMap::with_capacity(emails.len());

        for chunk in emails.chunks(self.chunk_size) {
            let mut futures = FuturesUnordered::new();

            for email in chunk {
                let pipeline = Arc::clone(&self.pipeline);
                let email = email.clone();
                futures.push(async move {
                    let record = pipeline.resolve(&email).await;
                    (email.as_str().to_string(), record)
                });

                // Respect the concurrency limit
                while futures.len() >= self.max_concurrent {
                    if let Some((address, record)) = futures.next().await {
                        results.insert(address, record);
                    }
                }
            }

            // Collect the remaining results
            while let Some((address, record)) = futures.next().await {
                results.insert(address, record);
            }
        }

        let found = results.values().filter(|r| r.found).count();
        tracing::info!(
            "Batch resolution finished: {found} of {} address(es) found",
            results.len()
        );

        results
    }
}
