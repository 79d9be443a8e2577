//! Mailscope Scraper
//!
//! Fetches a public profile page (typically GitHub) and extracts the
//! owner's display name through an ordered heuristic chain: structured
//! name selectors, page-title patterns, then the URL's username segment.
//! Precision over coverage: an authentic display name is preferred, and
//! the chain degrades to the bare username only when nothing better
//! exists.
//!
//! # Modules
//!
//! - [`provider`] - The [`NameExtractor`] trait
//! - [`client`] - The fetching implementation
//! - [`extract`] - Pure extraction heuristics
//! - [`error`] - Setup error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod error;
pub mod extract;
pub mod provider;

// Re-export commonly used types
pub use client::ProfileScraper;
pub use error::{Result, ScrapeError};
pub use provider::NameExtractor;
