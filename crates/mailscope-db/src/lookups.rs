//! Lookup operations for the `email_lookups` cache table.
//!
//! This module provides read/insert operations for cached resolutions.
//! Rows are append-only: an insert for an already-cached address is a
//! no-op, so the first recorded outcome always wins.

use crate::error::{DatabaseError, Result};
use chrono::{DateTime, Utc};
use mailscope_core::{ProfileRecord, ProfileSource};
use sqlx::{Pool, Row, Sqlite};

/// Fetch the cached record for an email address, if any.
///
/// The address is lowercased before lookup so callers don't have to
/// normalize first.
///
/// # Errors
/// Returns `DatabaseError` if the query fails or a stored row cannot be
/// decoded.
pub async fn get_lookup(pool: &Pool<Sqlite>, email: &str) -> Result<Option<ProfileRecord>> {
    let email = email.trim().to_lowercase();

    let row = sqlx::query(
        "SELECT email, found, name, headline, company, location, summary,
                photo_url, linkedin_url, twitter, industry, source, created_at
         FROM email_lookups
         WHERE email = ?",
    )
    .bind(&email)
    .fetch_optional(pool)
    .await?;

    row.map(|r| record_from_row(&r)).transpose()
}

/// Insert a completed resolution into the cache.
///
/// Returns `true` if the row was written, `false` if a record for this
/// address already existed (the existing row is left untouched).
///
/// # Errors
/// Returns `DatabaseError` if the insert fails.
pub async fn insert_lookup(pool: &Pool<Sqlite>, record: &ProfileRecord) -> Result<bool> {
    let result = sqlx::query(
        "INSERT INTO email_lookups (email, found, name, headline, company, location, summary,
                                    photo_url, linkedin_url, twitter, industry, source, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(email) DO NOTHING",
    )
    .bind(record.email.to_lowercase())
    .bind(i64::from(record.found))
    .bind(&record.name)
    .bind(&record.headline)
    .bind(&record.company)
    .bind(&record.location)
    .bind(&record.summary)
    .bind(&record.photo_url)
    .bind(&record.linkedin_url)
    .bind(&record.twitter)
    .bind(&record.industry)
    .bind(record.source.to_string())
    .bind(record.created_at.to_rfc3339())
    .execute(pool)
    .await?;

    let written = result.rows_affected() == 1;
    if !written {
        tracing::debug!("Cache already holds a record for {}, keeping it", record.email);
    }

    Ok(written)
}

/// Count cached records, split into (total, found).
///
/// # Errors
/// Returns `DatabaseError` if the query fails.
pub async fn count_lookups(pool: &Pool<Sqlite>) -> Result<(i64, i64)> {
    let row = sqlx::query(
        "SELECT COUNT(*) AS total, COALESCE(SUM(found), 0) AS found FROM email_lookups",
    )
    .fetch_one(pool)
    .await?;

    Ok((row.try_get("total")?, row.try_get("found")?))
}

/// Decode one `email_lookups` row into a [`ProfileRecord`].
fn record_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<ProfileRecord> {
    let source_str: String = row.try_get("source")?;
    let source = ProfileSource::parse(&source_str).ok_or_else(|| {
        DatabaseError::Decode(format!(
            "invalid source '{source_str}' in email_lookups table"
        ))
    })?;

    let created_at_str: String = row.try_get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

    let found: i64 = row.try_get("found")?;

    Ok(ProfileRecord {
        email: row.try_get("email")?,
        found: found != 0,
        name: row.try_get("name")?,
        headline: row.try_get("headline")?,
        company: row.try_get("company")?,
        location: row.try_get("location")?,
        summary: row.try_get("summary")?,
        photo_url: row.try_get("photo_url")?,
        linkedin_url: row.try_get("linkedin_url")?,
        twitter: row.try_get("twitter")?,
        industry: row.try_get("industry")?,
        source,
        created_at,
    })
}
