//! 弹性模式模块：为每次后端调用提供超时与有界重试。
//!
//! # Resilience Module
//!
//! Every backend call made by [`crate::TriageClient`] goes through the retry
//! executor defined here.
//!
//! ## Overview
//!
//! - Each attempt is bounded by a timeout (default 30 s); an attempt that
//!   exceeds it is dropped and counts as a transient failure.
//! - Transient failures (timeouts, connection errors, HTTP 503) are retried up
//!   to a fixed number of attempts (default 3).
//! - Between attempts the executor sleeps `base * 2^(n-1)`: 1 s, 2 s, 4 s …
//! - Any other HTTP status is handed back to the caller unchanged.
//!
//! ```rust
//! use complaint_triage_client::resilience::retry::{AttemptOutcome, RetryPolicy};
//! use std::time::Duration;
//!
//! # async fn demo() -> complaint_triage_client::Result<()> {
//! let policy = RetryPolicy::new(3, Duration::from_millis(10));
//! let value = policy
//!     .execute("demo", |attempt| async move { AttemptOutcome::Success(attempt) })
//!     .await?;
//! assert_eq!(value, 1);
//! # Ok(())
//! # }
//! ```

pub mod retry;

pub use retry::{AttemptOutcome, RetryPolicy};
