//! Mailscope Resolver
//!
//! The staged resolution engine. A pipeline checks the lookup cache,
//! then runs its stages in order (enrichment API, direct profile
//! search, GitHub bridge) until one produces a profile, and writes the
//! outcome back to the cache. A batch coordinator fans the pipeline out
//! over many addresses with bounded concurrency.
//!
//! # Modules
//!
//! - [`pipeline`] - Cache-fronted stage execution
//! - [`batch`] - Concurrent batch resolution
//! - [`stage`] - The [`ResolveStage`] trait and per-attempt outcomes
//! - [`stages`] - The built-in stage implementations
//! - [`queries`] - Search query templates
//! - [`matching`] - Profile URL extraction from search results
//! - [`error`] - Error types using thiserror

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod batch;
pub mod error;
pub mod matching;
pub mod pipeline;
pub mod queries;
pub mod stage;
pub mod stages;

// Re-export commonly used types
pub use batch::BatchCoordinator;
pub use error::{ResolveError, Result};
pub use pipeline::ResolutionPipeline;
pub use stage::{ResolveStage, StageOutcome};
pub use stages::{DirectSearchStage, EnrichmentStage, GithubBridgeStage};
