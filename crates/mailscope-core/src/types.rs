//! Shared domain types for email-to-profile resolution.
//!
//! This module defines the validated [`EmailAddress`] key type and the
//! canonical [`ProfileRecord`] that every lookup produces, along with the
//! [`ProfileSource`] enum recording which pipeline stage resolved it.

use crate::error::CoreError;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Newtype for email addresses with validation and case normalization.
///
/// Every address is trimmed and lowercased on construction, so an
/// `EmailAddress` is always a canonical cache key. Validation is
/// deliberately loose (one `@`, non-empty local part, dotted domain):
/// the pipeline treats the address as an opaque search subject, not a
/// deliverable mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new `EmailAddress` from a string.
    ///
    /// # Errors
    /// Returns an error if the input does not look like `local@domain.tld`.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CoreError> {
        let trimmed = raw.as_ref().trim();
        Self::validate(trimmed)?;
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Get the inner string value (always lowercase).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        // validate() guarantees exactly one '@'
        self.0.split('@').next().unwrap_or("")
    }

    /// The part after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }

    fn validate(raw: &str) -> Result<(), CoreError> {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX
            .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

        if raw.is_empty() {
            return Err(CoreError::Validation(
                "email address must not be empty".to_string(),
            ));
        }

        if regex.is_match(raw) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "invalid email address: expected local@domain.tld, got '{raw}'"
            )))
        }
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Which pipeline stage produced a profile record.
///
/// `Cache` never appears in a persisted row; it is stamped onto the copy
/// returned for a cache hit so callers can tell a fresh resolution from a
/// replayed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileSource {
    /// Served from a previously stored record
    Cache,
    /// Resolved by the paid enrichment API
    EnrichmentApi,
    /// Resolved by direct email-based web search
    DirectSearch,
    /// Resolved by the GitHub-then-LinkedIn bridge search
    GithubBridge,
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cache => write!(f, "cache"),
            Self::EnrichmentApi => write!(f, "enrichment-api"),
            Self::DirectSearch => write!(f, "direct-search"),
            Self::GithubBridge => write!(f, "github-bridge"),
        }
    }
}

impl ProfileSource {
    /// Parse from the stored string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cache" => Some(Self::Cache),
            "enrichment-api" => Some(Self::EnrichmentApi),
            "direct-search" => Some(Self::DirectSearch),
            "github-bridge" => Some(Self::GithubBridge),
            _ => None,
        }
    }
}

/// The optional profile-detail fields of a resolved record.
///
/// Every field may be absent; clients null-coalesce external payloads into
/// this shape once, at their own boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    /// Display name
    pub name: Option<String>,
    /// Professional headline
    pub headline: Option<String>,
    /// Current company name
    pub company: Option<String>,
    /// Location string as reported by the source
    pub location: Option<String>,
    /// Free-text summary/bio
    pub summary: Option<String>,
    /// Avatar/photo URL
    pub photo_url: Option<String>,
    /// LinkedIn profile URL
    pub linkedin_url: Option<String>,
    /// Twitter handle or URL
    pub twitter: Option<String>,
    /// Industry label
    pub industry: Option<String>,
}

impl ProfileDetails {
    /// A detail set carrying only a LinkedIn URL (direct-search result shape).
    #[must_use]
    pub fn linkedin_only(url: impl Into<String>) -> Self {
        Self {
            linkedin_url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// The canonical resolved-or-unresolved result for one email address.
///
/// Created once per distinct email the first time resolution completes
/// (success or exhausted failure) and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// The lookup key (always lowercase)
    pub email: String,
    /// Whether resolution produced a usable profile
    pub found: bool,
    /// Display name
    pub name: Option<String>,
    /// Professional headline
    pub headline: Option<String>,
    /// Current company name
    pub company: Option<String>,
    /// Location string
    pub location: Option<String>,
    /// Free-text summary/bio
    pub summary: Option<String>,
    /// Avatar/photo URL
    pub photo_url: Option<String>,
    /// LinkedIn profile URL
    pub linkedin_url: Option<String>,
    /// Twitter handle or URL
    pub twitter: Option<String>,
    /// Industry label
    pub industry: Option<String>,
    /// Which stage produced this record
    pub source: ProfileSource,
    /// When resolution completed
    pub created_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// Create a `found = true` record from a set of details.
    ///
    /// # Errors
    /// Returns a validation error if neither `name` nor `linkedin_url` is
    /// present; a profile is never "found" with zero recoverable attributes.
    pub fn resolved(
        email: &EmailAddress,
        source: ProfileSource,
        details: ProfileDetails,
    ) -> Result<Self, CoreError> {
        if details.name.is_none() && details.linkedin_url.is_none() {
            return Err(CoreError::Validation(format!(
                "resolved profile for {email} has neither name nor linkedin_url"
            )));
        }

        Ok(Self {
            email: email.as_str().to_string(),
            found: true,
            name: details.name,
            headline: details.headline,
            company: details.company,
            location: details.location,
            summary: details.summary,
            photo_url: details.photo_url,
            linkedin_url: details.linkedin_url,
            twitter: details.twitter,
            industry: details.industry,
            source,
            created_at: Utc::now(),
        })
    }

    /// Create a `found = false` record with no detail fields.
    #[must_use]
    pub fn not_found(email: &EmailAddress, source: ProfileSource) -> Self {
        Self {
            email: email.as_str().to_string(),
            found: false,
            name: None,
            headline: None,
            company: None,
            location: None,
            summary: None,
            photo_url: None,
            linkedin_url: None,
            twitter: None,
            industry: None,
            source,
            created_at: Utc::now(),
        }
    }

    /// Create a `found = false` record that keeps a partially extracted name.
    ///
    /// Used when the GitHub bridge recovered a name but no LinkedIn profile
    /// could be located for it; the name is kept for diagnostic value.
    #[must_use]
    pub fn not_found_with_name(
        email: &EmailAddress,
        source: ProfileSource,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::not_found(email, source)
        }
    }

    /// A copy of this record with `source` rewritten to [`ProfileSource::Cache`].
    ///
    /// The stored row keeps its original source; only the returned copy is
    /// marked as a cache hit.
    #[must_use]
    pub fn as_cache_hit(&self) -> Self {
        Self {
            source: ProfileSource::Cache,
            ..self.clone()
        }
    }
}
