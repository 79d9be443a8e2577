//! Mailscope Search
//!
//! Client for a Custom Search-style JSON API. Returns ranked
//! `{title, link, snippet}` items and enforces a minimum delay between
//! consecutive provider calls across all callers sharing one client.
//!
//! # Modules
//!
//! - [`provider`] - The [`SearchProvider`] trait and result item type
//! - [`client`] - The HTTP implementation
//! - [`throttle`] - Minimum-interval call spacing
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
pub mod throttle;

// Re-export commonly used types
pub use client::WebSearchClient;
pub use error::{Result, SearchError};
pub use provider::{SearchProvider, SearchResultItem};
pub use throttle::Throttle;
