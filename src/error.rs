use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "config.base_url", "draft.text")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected length, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "client_builder", "submit_complaint")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The review-side mutations a reviewer can perform on an analyzed complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Edit,
    Approve,
    Reject,
}

impl ReviewAction {
    /// User-facing failure message for this action.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ReviewAction::Edit => "Düzenleme hatası",
            ReviewAction::Approve => "Onaylama hatası",
            ReviewAction::Reject => "Reddetme hatası",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewAction::Edit => "edit",
            ReviewAction::Approve => "approve",
            ReviewAction::Reject => "reject",
        }
    }
}

/// Unified error type for the triage client.
///
/// Transient failures (`Transport`, `Timeout`, and a 503 surfaced as `Backend`)
/// are absorbed by the retry executor and only reach callers once retries are
/// exhausted. Everything else is terminal.
///
/// Messages that can reach a reviewer are Turkish; `Configuration` is only
/// raised while wiring the client and stays English.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Doğrulama hatası: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Ağ hatası: {0}")]
    Transport(#[from] TransportError),

    #[error("İstek zaman aşımına uğradı ({timeout_ms} ms)")]
    Timeout { timeout_ms: u64 },

    #[error("Backend hatası ({status}): {body}")]
    Backend { status: u16, body: String },

    #[error("{}", .action.failure_message())]
    ReviewAction { action: ReviewAction, status: u16 },

    #[error("Yanıt çözümlenemedi: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Maksimum deneme sayısı aşıldı ({attempts} deneme)")]
    RetriesExhausted { attempts: u32 },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Whether the failure is transient and worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_transient(),
            Error::Timeout { .. } => true,
            Error::Backend { status, .. } => *status == 503,
            _ => false,
        }
    }

    /// HTTP status carried by the error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Backend { status, .. } | Error::ReviewAction { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Validation { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}
