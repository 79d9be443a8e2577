//! Provider trait for email enrichment.
//!
//! The resolver consumes enrichment through [`EnrichmentProvider`] so
//! tests can substitute a canned implementation.

use crate::error::Result;
use async_trait::async_trait;
use mailscope_core::{EmailAddress, ProfileDetails};

/// What an enrichment call established about an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentOutcome {
    /// The provider holds a profile for this address.
    Found(ProfileDetails),
    /// The provider answered definitively that it has no usable record.
    NotFound,
}

/// Trait for services that turn an email address into profile details.
#[async_trait]
pub trait EnrichmentProvider: Send + Sync {
    /// Look up one email address.
    ///
    /// Returns `Ok(NotFound)` for a definitive "no record" answer;
    /// transport and quota failures are errors so the caller can fall
    /// through to the next resolution stage.
    async fn enrich(&self, email: &EmailAddress) -> Result<EnrichmentOutcome>;
}
