//! Bounded retry with exponential backoff.
//!
//! The loop is driven by a typed classification of each attempt
//! ([`AttemptOutcome`]) rather than by unwinding on error: an attempt either
//! succeeded, failed in a way that is worth repeating, or failed terminally.

use crate::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Default number of attempts for one logical operation.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default delay before the first retry; doubles on each subsequent retry.
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_millis(1_000);

/// Result of a single attempt, classified for the retry loop.
#[derive(Debug)]
pub enum AttemptOutcome<T> {
    Success(T),
    Retryable(Error),
    Terminal(Error),
}

impl<T> AttemptOutcome<T> {
    /// Classify a plain result using [`Error::is_retryable`].
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => AttemptOutcome::Success(value),
            Err(e) if e.is_retryable() => AttemptOutcome::Retryable(e),
            Err(e) => AttemptOutcome::Terminal(e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts allowed, including the first one.
    pub max_attempts: u32,
    pub backoff_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_base: DEFAULT_BACKOFF_BASE,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff_base: Duration) -> Self {
        Self {
            max_attempts,
            backoff_base,
        }
    }

    /// A policy that never retries.
    pub fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            backoff_base: Duration::ZERO,
        }
    }

    /// Delay after the `failed_attempts`-th failure: base * 2^(failed_attempts - 1).
    pub fn backoff_delay(&self, failed_attempts: u32) -> Duration {
        let exponent = failed_attempts.saturating_sub(1);
        let factor = 1u32.checked_shl(exponent).unwrap_or(u32::MAX);
        self.backoff_base.saturating_mul(factor)
    }

    /// Run `attempt` until it succeeds, fails terminally, or the policy is exhausted.
    ///
    /// `attempt` receives the 1-based attempt number. Attempts run strictly one
    /// after another.
    pub async fn execute<T, F, Fut>(&self, operation: &str, mut attempt: F) -> Result<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = AttemptOutcome<T>>,
    {
        let mut failed = 0u32;

        while failed < self.max_attempts {
            match attempt(failed + 1).await {
                AttemptOutcome::Success(value) => return Ok(value),
                AttemptOutcome::Terminal(e) => return Err(e),
                AttemptOutcome::Retryable(e) => {
                    failed += 1;
                    warn!(
                        operation,
                        attempt = failed,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "request attempt {} failed: {}",
                        failed,
                        e
                    );

                    if failed >= self.max_attempts {
                        return Err(e);
                    }

                    tokio::time::sleep(self.backoff_delay(failed)).await;
                }
            }
        }

        Err(Error::RetriesExhausted { attempts: failed })
    }
}
