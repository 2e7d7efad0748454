//! HTTP transport: builds and sends single requests against the triage backend.
//!
//! One call here is exactly one attempt; retry and timeout policy live in
//! [`crate::resilience`].

mod http;

pub use http::{HttpTransport, OutboundRequest, TransportError};
