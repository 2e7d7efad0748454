//! 类型系统模块：后端线路格式与前端领域类型。
//!
//! # Types Module
//!
//! Two layers of types live here:
//!
//! - the **wire schema** of the triage backend ([`backend`]), parsed with serde
//!   at the edge and tolerant of missing/null fields;
//! - the **domain types** ([`domain`], [`status`], [`submission`]) that callers
//!   work with, where category and priority are closed enums.
//!
//! [`crate::adapter`] converts the former into the latter.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`BackendComplaintResponse`] | Raw response of a complaint submission |
//! | [`AnalysisResult`] | Category, priority, confidence and reasoning |
//! | [`Suggestion`] | Draft reply, suggested action and cited KB articles |
//! | [`SimilarComplaint`] | One hit of the similarity search |
//! | [`ComplaintDraft`] | Complaint text gated on minimum length |
//! | [`SystemHealth`] | Retrieval/generation subsystem state |

pub mod backend;
pub mod domain;
pub mod status;
pub mod submission;

pub use backend::{
    BackendComplaintResponse, BackendConfidenceScores, BackendSource, BackendSystemStatus,
    SimilarComplaint, SimilarComplaintsResponse,
};
pub use domain::{
    AnalysisResult, AnalyzedComplaint, ComplaintCategory, ComplaintRecord, KbArticle, Priority,
    Sentiment, SuggestedAction, Suggestion,
};
pub use status::{
    pipeline_stages, ComplaintStatus, PipelineStage, StageState, SubsystemState, SystemHealth,
};
pub use submission::{ComplaintDraft, MIN_COMPLAINT_LENGTH};
