//! The uniform stage interface the pipeline iterates over.

use async_trait::async_trait;
use mailscope_core::{EmailAddress, ProfileRecord, ProfileSource};

/// What one pipeline stage established about an address.
#[derive(Debug, Clone)]
pub enum StageOutcome {
    /// The stage produced a usable record; resolution stops here.
    Resolved(ProfileRecord),

    /// The stage ran and found nothing; the pipeline falls through.
    Miss {
        /// A partially recovered name worth keeping on an eventual
        /// negative record (the bridge stage sets this when it found a
        /// person but not their profile).
        partial_name: Option<String>,
    },

    /// The stage could not do its job (transport, auth, quota); the
    /// pipeline falls through, logging the reason.
    Unavailable {
        /// Human-readable failure description
        message: String,
    },
}

impl StageOutcome {
    /// A plain miss with nothing recovered.
    #[must_use]
    pub fn miss() -> Self {
        Self::Miss { partial_name: None }
    }
}

/// One fallback stage of the resolution pipeline.
///
/// Stages whose credentials are absent are excluded when the pipeline is
/// assembled, so `attempt` can assume a usable client.
#[async_trait]
pub trait ResolveStage: Send + Sync {
    /// Stable stage name for logging.
    fn name(&self) -> &'static str;

    /// The source label stamped on records this stage produces, also
    /// used for the negative record when this is the last stage tried.
    fn source(&self) -> ProfileSource;

    /// Try to resolve the address. Never errors; failure modes are
    /// encoded in the outcome.
    async fn attempt(&self, email: &EmailAddress) -> StageOutcome;
}
