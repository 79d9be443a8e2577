//! ReverseContact-style enrichment API client.
//!
//! Issues `GET {base}/enrichment?apikey=...&email=...` and maps the
//! provider's person/company payload onto [`ProfileDetails`].

use crate::error::{EnrichmentError, Result};
use crate::provider::{EnrichmentOutcome, EnrichmentProvider};
use async_trait::async_trait;
use mailscope_core::{EmailAddress, EnrichmentConfig, ProfileDetails};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// HTTP client for the paid enrichment API.
pub struct EnrichmentClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl EnrichmentClient {
    /// Create a new client with the given API key and settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>, config: &EnrichmentConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EnrichmentError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl EnrichmentProvider for EnrichmentClient {
    async fn enrich(&self, email: &EmailAddress) -> Result<EnrichmentOutcome> {
        tracing::debug!("Enrichment lookup for {}", email);

        let response = self
            .client
            .get(format!("{}/enrichment", self.base_url))
            .query(&[("apikey", self.api_key.as_str()), ("email", email.as_str())])
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            // The provider reports an unknown address as an error status
            // rather than an empty payload.
            if status == reqwest::StatusCode::NOT_FOUND
                || (status.is_client_error() && body.to_lowercase().contains("not found"))
            {
                tracing::debug!("Enrichment API has no record for {}", email);
                return Ok(EnrichmentOutcome::NotFound);
            }

            return Err(EnrichmentError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let payload: EnrichmentResponse = response
            .json()
            .await
            .map_err(|e| EnrichmentError::Parse(format!("invalid response body: {e}")))?;

        if let (Some(credits), Some(rate_limit)) = (payload.credits_left, payload.rate_limit_left) {
            tracing::debug!(
                credits_left = credits,
                rate_limit_left = rate_limit,
                "Enrichment quota after lookup"
            );
        }

        Ok(outcome_from_response(payload))
    }
}

/// Map the provider payload onto an outcome.
///
/// A payload without a person section, or whose person lacks a resolvable
/// name, counts as a definitive miss. A LinkedIn URL alone does not make a
/// person resolvable.
fn outcome_from_response(response: EnrichmentResponse) -> EnrichmentOutcome {
    let Some(person) = response.person else {
        return EnrichmentOutcome::NotFound;
    };

    let Some(name) = person.display_name() else {
        return EnrichmentOutcome::NotFound;
    };

    let company = response.company.unwrap_or_default();

    EnrichmentOutcome::Found(ProfileDetails {
        name: Some(name),
        headline: non_empty(person.headline),
        company: non_empty(company.name),
        location: non_empty(person.location),
        summary: non_empty(person.summary),
        photo_url: non_empty(person.photo_url),
        linkedin_url: non_empty(person.linked_in_url),
        twitter: non_empty(person.twitter_url),
        industry: non_empty(company.industry),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// Enrichment API types

#[derive(Debug, Deserialize)]
struct EnrichmentResponse {
    #[serde(default)]
    credits_left: Option<i64>,
    #[serde(default)]
    rate_limit_left: Option<i64>,
    #[serde(default)]
    person: Option<PersonPayload>,
    #[serde(default)]
    company: Option<CompanyPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonPayload {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default, rename = "full_name")]
    full_name: Option<String>,
    #[serde(default)]
    headline: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default, rename = "linkedInUrl")]
    linked_in_url: Option<String>,
    #[serde(default, rename = "twitter_url")]
    twitter_url: Option<String>,
}

impl PersonPayload {
    /// First+last name when both are present, otherwise the provider's
    /// preassembled full name.
    fn display_name(&self) -> Option<String> {
        match (non_empty(self.first_name.clone()), non_empty(self.last_name.clone())) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => non_empty(self.full_name.clone()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CompanyPayload {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    industry: Option<String>,
}
