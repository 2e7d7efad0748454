use crate::client::core::TriageClient;
use crate::config::ClientConfig;
use crate::Result;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Starts from [`ClientConfig::default`]; every setter overrides one field.
#[derive(Debug, Clone, Default)]
pub struct TriageClientBuilder {
    config: ClientConfig,
}

impl TriageClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.default_timeout = timeout;
        self
    }

    /// Total attempts per operation.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.default_retries = retries;
        self
    }

    pub fn backoff_base(mut self, base: Duration) -> Self {
        self.config.backoff_base = base;
        self
    }

    /// Identity sent in `X-User-Id` on edit requests.
    pub fn actor_id(mut self, actor_id: impl Into<String>) -> Self {
        self.config.actor_id = actor_id.into();
        self
    }

    pub fn build(self) -> Result<TriageClient> {
        TriageClient::new(self.config)
    }
}
