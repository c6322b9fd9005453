//! Shared retry policy for provider calls
//!
//! Only connection-level failures are retried (see [`TtsError::is_transient`]).
//! Each retry waits a whole number of seconds drawn uniformly from
//! `min_backoff_secs..=max_backoff_secs`.

use crate::error::{TtsError, TtsResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio_retry::RetryIf;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub min_backoff_secs: u64,
    pub max_backoff_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            min_backoff_secs: 1,
            max_backoff_secs: 6,
        }
    }
}

impl RetryPolicy {
    /// No retries at all
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Backoff delays, one per allowed retry
    pub fn backoff_schedule(&self) -> Vec<Duration> {
        let lo = self.min_backoff_secs.min(self.max_backoff_secs);
        let hi = self.min_backoff_secs.max(self.max_backoff_secs);
        let mut rng = rand::thread_rng();
        (0..self.max_retries)
            .map(|_| Duration::from_secs(rng.gen_range(lo..=hi)))
            .collect()
    }

    /// Run `op`, retrying transient failures per this policy.
    pub async fn run<T, F, Fut>(&self, what: &str, op: F) -> TtsResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = TtsResult<T>>,
    {
        RetryIf::spawn(
            self.backoff_schedule(),
            op,
            |e: &TtsError| {
                let transient = e.is_transient();
                if transient {
                    warn!("🔁 {} failed with a connection error, retrying: {}", what, e);
                }
                transient
            },
        )
        .await
    }
}
