//! Triage backend client.
//!
//! [`TriageClient`] owns the HTTP transport and the retry policy; the
//! complaint operations are split into submodules under `src/client/`.

pub mod api;
pub mod builder;
pub mod complaints;
pub mod core;
pub mod options;
pub mod workflow;

pub use api::ComplaintApi;
pub use builder::TriageClientBuilder;
pub use complaints::{ACTOR_HEADER, DEFAULT_SIMILAR_LIMIT, IDEMPOTENCY_HEADER};
pub use core::{BackendReply, TriageClient};
pub use options::{RequestOptions, SubmitOptions};
pub use workflow::{open_complaint, ComplaintWorkspace};
