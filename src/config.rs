//! Client configuration.
//!
//! Configuration is an explicit value handed to the client; nothing is read
//! from the process environment unless [`ClientConfig::from_env`] is called.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::resilience::retry::{DEFAULT_BACKOFF_BASE, DEFAULT_MAX_ATTEMPTS};
use crate::{Error, ErrorContext, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);
/// Actor id sent in `X-User-Id` when none is configured.
pub const DEFAULT_ACTOR_ID: &str = "frontend-user";

pub const ENV_BASE_URL: &str = "COMPLAINT_BACKEND_URL";
pub const ENV_TIMEOUT_MS: &str = "COMPLAINT_HTTP_TIMEOUT_MS";
pub const ENV_RETRIES: &str = "COMPLAINT_HTTP_RETRIES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Per-attempt timeout.
    pub default_timeout: Duration,
    /// Total attempts per operation, first one included.
    pub default_retries: u32,
    /// Delay before the first retry; doubles afterwards.
    pub backoff_base: Duration,
    pub actor_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_timeout: DEFAULT_TIMEOUT,
            default_retries: DEFAULT_MAX_ATTEMPTS,
            backoff_base: DEFAULT_BACKOFF_BASE,
            actor_id: DEFAULT_ACTOR_ID.to_string(),
        }
    }
}

/// Serialized form: `{ baseUrl, defaultTimeoutMs, defaultRetries, backoffBaseMs, actorId }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    default_timeout_ms: Option<u64>,
    default_retries: Option<u32>,
    backoff_base_ms: Option<u64>,
    actor_id: Option<String>,
}

impl ConfigFile {
    fn into_config(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            default_timeout: self
                .default_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.default_timeout),
            default_retries: self.default_retries.unwrap_or(defaults.default_retries),
            backoff_base: self
                .backoff_base_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.backoff_base),
            actor_id: self.actor_id.unwrap_or(defaults.actor_id),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.default_retries = retries;
        self
    }

    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    pub fn with_actor_id(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = actor_id.into();
        self
    }

    /// Defaults overridden by `COMPLAINT_BACKEND_URL`, `COMPLAINT_HTTP_TIMEOUT_MS`
    /// and `COMPLAINT_HTTP_RETRIES` when set. Unparseable numbers are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var(ENV_BASE_URL).unwrap_or(defaults.base_url),
            default_timeout: std::env::var(ENV_TIMEOUT_MS)
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.default_timeout),
            default_retries: std::env::var(ENV_RETRIES)
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .unwrap_or(defaults.default_retries),
            ..defaults
        }
    }

    /// Parse a YAML (or JSON, which is valid YAML) document.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(source).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid client configuration: {}", e),
                ErrorContext::new().with_source("config_loader"),
            )
        })?;
        Ok(file.into_config())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("cannot read client configuration: {}", e),
                ErrorContext::new()
                    .with_details(path.display().to_string())
                    .with_source("config_loader"),
            )
        })?;
        Self::from_yaml_str(&source)
    }

    /// Parse and check the base URL; only http(s) is accepted.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(self.base_url.clone()),
            )
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::configuration_with_context(
                format!("unsupported URL scheme '{}'", other),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(self.base_url.clone()),
            )),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url()?;
        if self.default_timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "timeout must be greater than zero",
                ErrorContext::new().with_field_path("config.default_timeout"),
            ));
        }
        if self.actor_id.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "actor id must not be empty",
                ErrorContext::new().with_field_path("config.actor_id"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_contract() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.base_url, "http://localhost:8080");
        assert_eq!(cfg.default_timeout, Duration::from_millis(30_000));
        assert_eq!(cfg.default_retries, 3);
        assert_eq!(cfg.backoff_base, Duration::from_secs(1));
        assert_eq!(cfg.actor_id, "frontend-user");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn yaml_overrides_only_given_fields() {
        let cfg = ClientConfig::from_yaml_str(
            "baseUrl: https://triage.internal\ndefaultTimeoutMs: 5000\ndefaultRetries: 5\n",
        )
        .unwrap();
        assert_eq!(cfg.base_url, "https://triage.internal");
        assert_eq!(cfg.default_timeout, Duration::from_secs(5));
        assert_eq!(cfg.default_retries, 5);
        assert_eq!(cfg.actor_id, DEFAULT_ACTOR_ID);
    }

    #[test]
    fn json_documents_are_accepted() {
        let cfg = ClientConfig::from_yaml_str(r#"{"baseUrl": "http://10.0.0.5:9000", "actorId": "agent-7"}"#)
            .unwrap();
        assert_eq!(cfg.base_url, "http://10.0.0.5:9000");
        assert_eq!(cfg.actor_id, "agent-7");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ClientConfig::from_yaml_str("baseURL: http://x\n").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn base_url_must_be_http() {
        assert!(ClientConfig::new("ftp://files.local").validate().is_err());
        assert!(ClientConfig::new("not a url").validate().is_err());
        assert!(ClientConfig::new("https://triage.example.com/")
            .validate()
            .is_ok());
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let cfg = ClientConfig::default().with_timeout(Duration::ZERO);
        assert!(cfg.validate().is_err());
    }
}
