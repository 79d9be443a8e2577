//! Minimum-interval spacing between outbound calls.
//!
//! The search provider meters by request, so every caller sharing a
//! client must respect one global minimum delay. Holding the lock across
//! the sleep serializes concurrent callers and spaces them in one step.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum delay between consecutive calls.
#[derive(Debug)]
pub struct Throttle {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl Throttle {
    /// Create a throttle with the given minimum spacing.
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// Wait until at least the minimum interval has passed since the
    /// previous call, then claim the current slot.
    pub async fn wait(&self) {
        let mut last = self.last_call.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }
}
