//! Mailscope Core - Foundation crate for the mailscope contact resolver.
//!
//! This crate provides shared types, error handling, and configuration
//! management that all other mailscope crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes and enums (`EmailAddress`, `ProfileRecord`, `ProfileSource`)
//!
//! # Example
//!
//! ```rust
//! use mailscope_core::{AppConfig, EmailAddress};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! let email = EmailAddress::new("Jane.Doe@Example.com")?;
//! assert_eq!(email.as_str(), "jane.doe@example.com");
//! assert_eq!(email.domain(), "example.com");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{
    AppConfig, DatabaseConfig, EnrichmentConfig, ResolverConfig, SearchConfig,
};
pub use error::{ConfigError, ConfigResult, CoreError, Result};
pub use types::{EmailAddress, ProfileDetails, ProfileRecord, ProfileSource};
