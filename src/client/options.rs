use std::time::Duration;
use uuid::Uuid;

/// Per-call overrides of the client's timeout and retry defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
    /// Total attempts, first one included.
    pub retries: Option<u32>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single_attempt() -> Self {
        Self {
            timeout: None,
            retries: Some(1),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }
}

/// Options for complaint submission.
///
/// Submission is not idempotent on the backend, so it defaults to a single
/// attempt. Retrying is opt-in and should be paired with an idempotency key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOptions {
    pub request: RequestOptions,
    pub idempotency_key: Option<String>,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            request: RequestOptions::single_attempt(),
            idempotency_key: None,
        }
    }
}

impl SubmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = Some(timeout);
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.request.retries = Some(retries);
        self
    }

    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Retry up to `retries` attempts under a freshly generated idempotency key.
    pub fn retrying(retries: u32) -> Self {
        Self::new()
            .with_retries(retries)
            .with_idempotency_key(Uuid::new_v4().to_string())
    }
}
