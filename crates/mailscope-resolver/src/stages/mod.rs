//! The concrete fallback stages, in their pipeline order.

pub mod direct_search;
pub mod enrichment;
pub mod github_bridge;

pub use direct_search::DirectSearchStage;
pub use enrichment::EnrichmentStage;
pub use github_bridge::GithubBridgeStage;
