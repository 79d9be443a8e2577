//! Mailscope Enrichment
//!
//! Client for the paid email-enrichment API: given an address, returns
//! the profile details the provider holds for it, or a definitive miss.
//!
//! # Modules
//!
//! - [`provider`] - The [`EnrichmentProvider`] trait and outcome type
//! - [`client`] - The HTTP implementation
//! - [`error`] - Error types using thiserror

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod error;
pub mod provider;

// Re-export commonly used types
pub use client::EnrichmentClient;
pub use error::{EnrichmentError, Result};
pub use provider::{EnrichmentOutcome, EnrichmentProvider};
