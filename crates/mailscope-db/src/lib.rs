//! Mailscope Database Layer
//!
//! Provides `SQLite`-backed persistence for the email lookup cache.
//! Uses `SQLx` with embedded, versioned migrations.
//!
//! # Architecture
//!
//! - **Append-only cache**: one row per email, written once and never updated
//! - **Migrations**: SQL migrations are embedded and versioned using `SQLx`
//! - **Connection pooling**: file-backed databases use a small pool; in-memory
//!   databases are pinned to a single connection
//!
//! # Example
//!
//! ```ignore
//! use mailscope_db::Database;
//!
//! let db = Database::new("lookups.db").await?;
//! db.run_migrations().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod connection;
pub mod error;
pub mod lookups;
pub mod migrations;
pub mod store;

// Re-export commonly used types
pub use error::{DatabaseError, Result};
pub use store::LookupStore;

use std::path::Path;

/// High-level database interface with migrations.
///
/// Wraps a `SQLx` pool and exposes the lookup-cache operations plus the
/// [`LookupStore`] trait implementation the resolver consumes.
#[derive(Debug)]
pub struct Database {
    pool: sqlx::Pool<sqlx::Sqlite>,
}

impl Database {
    /// Open (or create) the cache database at the given path.
    ///
    /// # Arguments
    /// * `path` - Path to the database file (or `:memory:` for in-memory)
    ///
    /// # Errors
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let pool = connection::connect(path).await?;
        Ok(Self { pool })
    }

    /// Run all pending database migrations.
    ///
    /// Call this after creating a new database instance to ensure the
    /// schema is up to date.
    ///
    /// # Errors
    /// Returns `DatabaseError::Migration` if any migration fails.
    pub async fn run_migrations(&self) -> Result<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// Get the current schema version.
    ///
    /// Returns the number of applied migrations.
    ///
    /// # Errors
    /// Returns `DatabaseError` if the version cannot be queried.
    pub async fn get_schema_version(&self) -> Result<i64> {
        migrations::get_schema_version(&self.pool).await
    }

    /// Get a reference to the underlying connection pool.
    ///
    /// This allows direct access to the `SQLx` pool for custom queries.
    #[must_use]
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Sqlite> {
        &self.pool
    }

    /// Count cached records, split into (total, found).
    ///
    /// # Errors
    /// Returns `DatabaseError` if the query fails.
    pub async fn lookup_counts(&self) -> Result<(i64, i64)> {
        lookups::count_lookups(&self.pool).await
    }

    /// Close the database connection gracefully.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("Lookup cache pool closed");
    }
}
