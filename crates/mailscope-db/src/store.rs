//! Storage seam for the lookup cache.
//!
//! The resolver pipeline talks to the cache through the [`LookupStore`]
//! trait rather than a concrete database, so tests can substitute an
//! in-memory stub and count calls.

use crate::error::Result;
use crate::{lookups, Database};
use async_trait::async_trait;
use mailscope_core::{EmailAddress, ProfileRecord};

/// Read/insert access to cached resolutions.
#[async_trait]
pub trait LookupStore: Send + Sync {
    /// Fetch the cached record for an address, if one exists.
    async fn get(&self, email: &EmailAddress) -> Result<Option<ProfileRecord>>;

    /// Store a completed resolution.
    ///
    /// Returns `true` if the record was written, `false` if an existing
    /// record for the address was kept instead.
    async fn put(&self, record: &ProfileRecord) -> Result<bool>;
}

#[async_trait]
impl LookupStore for Database {
    async fn get(&self, email: &EmailAddress) -> Result<Option<ProfileRecord>> {
        lookups::get_lookup(self.pool(), email.as_str()).await
    }

    async fn put(&self, record: &ProfileRecord) -> Result<bool> {
        lookups::insert_lookup(self.pool(), record).await
    }
}
