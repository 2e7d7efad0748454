//! # complaint-triage-client
//!
//! 投诉分诊后端的弹性 HTTP 客户端与响应适配器。
//!
//! Resilient HTTP client and response adapter for the ComplaintOps triage
//! backend.
//!
//! ## Overview
//!
//! The backend masks personal data in a complaint, classifies it, retrieves
//! supporting documents and drafts a reply. This crate is the client side of
//! that service:
//!
//! - **Resilient requests**: every call is bounded by a per-attempt timeout and
//!   retried with exponential backoff on timeouts, connection failures and
//!   `503 Service Unavailable`.
//! - **Typed wire schema**: the backend's Turkish snake_case payload is parsed
//!   at the edge and tolerates missing fields.
//! - **Response adapter**: backend codes become closed domain enums; unmapped
//!   codes fall back to `UNKNOWN` / `MEDIUM` instead of failing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use complaint_triage_client::{adapt_backend_response, TriageClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> complaint_triage_client::Result<()> {
//!     let client = TriageClient::builder()
//!         .base_url("http://localhost:8080")
//!         .timeout(Duration::from_secs(30))
//!         .build()?;
//!
//!     let backend = client
//!         .submit_complaint("Kartımdan bilgim dışında 500 TL çekildi")
//!         .await?;
//!     let adapted = adapt_backend_response(&backend);
//!     println!("{:?} / {:?}", adapted.analysis.category, adapted.analysis.priority);
//!
//!     if let Some(id) = backend.id {
//!         for similar in client.find_similar_complaints(id, None).await {
//!             println!("{} ({:.2})", similar.masked_text, similar.similarity_score);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `TriageClient`, its builder and the complaint operations |
//! | [`adapter`] | Backend response → domain analysis and suggestion |
//! | [`types`] | Wire schema and domain types |
//! | [`resilience`] | Retry policy and attempt classification |
//! | [`transport`] | Single-attempt HTTP transport |
//! | [`config`] | Injected client configuration |

pub mod adapter;
pub mod client;
pub mod config;
pub mod resilience;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use adapter::{adapt_backend_response, analyze_backend_response, AdaptedResponse};
pub use client::{
    open_complaint, BackendReply, ComplaintApi, ComplaintWorkspace, RequestOptions, SubmitOptions,
    TriageClient, TriageClientBuilder,
};
pub use config::ClientConfig;
pub use types::{
    AnalysisResult, AnalyzedComplaint, BackendComplaintResponse, ComplaintCategory,
    ComplaintDraft, KbArticle, Priority, Sentiment, SimilarComplaint, SuggestedAction, Suggestion,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ReviewAction};
