use crate::client::builder::TriageClientBuilder;
use crate::client::options::RequestOptions;
use crate::config::ClientConfig;
use crate::resilience::retry::{AttemptOutcome, RetryPolicy};
use crate::transport::{HttpTransport, OutboundRequest, TransportError};
use crate::{Error, Result};
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

/// A fully buffered backend answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub status: StatusCode,
    pub body: String,
}

impl BackendReply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Client for the complaint triage backend.
///
/// Cheap to clone; clones share one connection pool. Holds no mutable state,
/// so concurrent calls are independent of each other.
#[derive(Debug, Clone)]
pub struct TriageClient {
    pub(crate) transport: HttpTransport,
    pub(crate) config: ClientConfig,
}

impl TriageClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;
        let transport = HttpTransport::new(&base_url)?;
        Ok(Self { transport, config })
    }

    pub fn builder() -> TriageClientBuilder {
        TriageClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// The retry policy a call with `options` will run under.
    pub fn retry_policy(&self, options: &RequestOptions) -> RetryPolicy {
        RetryPolicy::new(
            options.retries.unwrap_or(self.config.default_retries),
            self.config.backoff_base,
        )
    }

    /// Send `request`, retrying transient failures.
    ///
    /// Timeouts, connection failures and `503 Service Unavailable` are retried
    /// with exponential backoff. Any other response, successful or not, is
    /// returned as-is; checking the status is up to the caller.
    ///
    /// The per-attempt timeout covers the whole exchange, body included.
    pub async fn fetch_with_retry(
        &self,
        request: &OutboundRequest,
        options: &RequestOptions,
    ) -> Result<BackendReply> {
        let timeout = options.timeout.unwrap_or(self.config.default_timeout);
        let policy = self.retry_policy(options);
        let operation = format!("{} {}", request.method, request.path);
        let request_id = Uuid::new_v4().to_string();
        let request_id = request_id.as_str();

        policy
            .execute(&operation, move |attempt| async move {
                AttemptOutcome::from_result(self.attempt(request, request_id, timeout, attempt).await)
            })
            .await
    }

    async fn attempt(
        &self,
        request: &OutboundRequest,
        request_id: &str,
        timeout: Duration,
        attempt: u32,
    ) -> Result<BackendReply> {
        let start = Instant::now();
        // Dropping the in-flight future on expiry cancels the request; on
        // completion the timer is dropped with it.
        let reply = tokio::time::timeout(timeout, self.send_once(request, request_id))
            .await
            .map_err(|_| Error::Timeout {
                timeout_ms: timeout.as_millis() as u64,
            })??;

        debug!(
            method = %request.method,
            path = request.path.as_str(),
            request_id,
            attempt,
            http_status = reply.status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "backend responded"
        );
        Ok(reply)
    }

    async fn send_once(&self, request: &OutboundRequest, request_id: &str) -> Result<BackendReply> {
        let response = self.transport.send(request, Some(request_id)).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(Error::Backend {
                status: status.as_u16(),
                body,
            });
        }

        Ok(BackendReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_call_retries_override_config() {
        let client = TriageClient::new(
            ClientConfig::default()
                .with_retries(4)
                .with_backoff_base(Duration::from_millis(20)),
        )
        .unwrap();

        let policy = client.retry_policy(&RequestOptions::default());
        assert_eq!(policy.max_attempts, 4);
        assert_eq!(policy.backoff_base, Duration::from_millis(20));

        let policy = client.retry_policy(&RequestOptions::single_attempt());
        assert_eq!(policy.max_attempts, 1);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let result = TriageClient::new(ClientConfig::new("mailto:ops@example.com"));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
