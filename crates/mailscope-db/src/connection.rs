//! Database connection management.
//!
//! Opens the `SQLite` cache database through a `SQLx` pool, creating the
//! file and its parent directory on first use.

use crate::error::{DatabaseError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;

/// Open a connection pool for the lookup cache.
///
/// # Arguments
/// * `path` - Path to the `SQLite` database file (or `:memory:` for in-memory)
///
/// # Errors
/// Returns `DatabaseError::Open` if the file cannot be created or opened.
pub async fn connect(path: impl AsRef<Path>) -> Result<Pool<Sqlite>> {
    let path = path.as_ref();
    let path_str = path
        .to_str()
        .ok_or_else(|| DatabaseError::Open("invalid database path: not valid UTF-8".to_string()))?;

    let in_memory = path_str == ":memory:";

    if !in_memory {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let mut connect_options = SqliteConnectOptions::from_str(path_str)
        .map_err(|e| DatabaseError::Open(format!("invalid connection string: {e}")))?
        .create_if_missing(true);

    if !in_memory {
        connect_options = connect_options.journal_mode(SqliteJournalMode::Wal);
    }

    // An in-memory database exists per connection, so the pool must not
    // hand out more than one.
    let max_connections = if in_memory { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options)
        .await
        .map_err(|e| DatabaseError::Open(format!("failed to initialize pool: {e}")))?;

    tracing::info!("Lookup cache pool opened at {}", path_str);

    Ok(pool)
}
