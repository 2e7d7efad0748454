//! 响应适配器：把后端线路格式转换为领域类型。
//!
//! # Response Adapter
//!
//! Pure, stateless translation of a [`BackendComplaintResponse`] into the
//! domain's [`AnalysisResult`] and [`Suggestion`].
//!
//! - Unmapped category/priority codes fall back to `Unknown` / `Medium`; the
//!   translation itself never fails.
//! - The confidence score is the mean of the category and priority
//!   confidences, each defaulting to 0.
//! - Exactly one action is suggested, driven by the human-review flag.
//! - Sources become KB articles in backend order with ids `doc-<index>`.

pub mod mapping;

use serde::Serialize;
use tracing::warn;

use crate::types::{
    AnalysisResult, AnalyzedComplaint, BackendComplaintResponse, BackendSource, ComplaintCategory,
    ComplaintRecord, ComplaintStatus, KbArticle, Priority, Sentiment, SuggestedAction, Suggestion,
    SystemHealth,
};

pub use mapping::{category_from_code, priority_from_code};

/// Title used for sources the backend returned without a document name.
pub const UNKNOWN_DOCUMENT_TITLE: &str = "Bilinmeyen Doküman";
/// The backend reports no per-source score, so every cited article gets this.
pub const DEFAULT_KB_RELEVANCE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptedResponse {
    pub analysis: AnalysisResult,
    pub suggestion: Suggestion,
}

pub fn adapt_backend_response(backend: &BackendComplaintResponse) -> AdaptedResponse {
    let confidence = backend.confidence.unwrap_or_default();
    let category_confidence = confidence.category.unwrap_or(0.0);
    let priority_confidence = confidence.priority.unwrap_or(0.0);

    let analysis = AnalysisResult {
        category: resolve_category(&backend.category_code),
        priority: resolve_priority(&backend.priority_code),
        sentiment: Sentiment::default(),
        confidence_score: (category_confidence + priority_confidence) / 2.0,
        reasoning: reasoning(category_confidence, priority_confidence),
    };

    let action = if backend.needs_human_review {
        SuggestedAction::HumanReviewRequired
    } else {
        SuggestedAction::AutoApproveEligible
    };

    let suggestion = Suggestion {
        response_draft: backend.suggestion.clone(),
        actions: vec![action],
        kb_articles: backend
            .sources
            .iter()
            .enumerate()
            .map(|(index, source)| kb_article(index, source))
            .collect(),
    };

    AdaptedResponse {
        analysis,
        suggestion,
    }
}

pub fn complaint_record(backend: &BackendComplaintResponse) -> ComplaintRecord {
    ComplaintRecord {
        backend_id: backend.id,
        masked_text: backend.masked_text.clone(),
        status: backend.status.as_deref().map(ComplaintStatus::from_code),
        needs_human_review: backend.needs_human_review,
        review_id: backend.review_id.clone(),
        health: backend.system_status.as_ref().map(SystemHealth::from_backend),
    }
}

/// Record, analysis and suggestion in one value.
pub fn analyze_backend_response(backend: &BackendComplaintResponse) -> AnalyzedComplaint {
    let AdaptedResponse {
        analysis,
        suggestion,
    } = adapt_backend_response(backend);
    AnalyzedComplaint {
        record: complaint_record(backend),
        analysis,
        suggestion,
    }
}

fn resolve_category(code: &str) -> ComplaintCategory {
    category_from_code(code).unwrap_or_else(|| {
        warn!(code, "unmapped backend category code, using UNKNOWN");
        ComplaintCategory::Unknown
    })
}

fn resolve_priority(code: &str) -> Priority {
    priority_from_code(code).unwrap_or_else(|| {
        warn!(code, "unmapped backend priority code, using MEDIUM");
        Priority::Medium
    })
}

fn percent(confidence: f64) -> i64 {
    (confidence * 100.0).round() as i64
}

fn reasoning(category_confidence: f64, priority_confidence: f64) -> String {
    format!(
        "Kategori güveni: %{}, Öncelik güveni: %{}",
        percent(category_confidence),
        percent(priority_confidence)
    )
}

fn kb_article(index: usize, source: &BackendSource) -> KbArticle {
    let title = source
        .document_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_DOCUMENT_TITLE);

    KbArticle {
        id: format!("doc-{}", index),
        title: title.to_string(),
        relevance: DEFAULT_KB_RELEVANCE,
        summary: source.summary.clone(),
        source: source.origin.clone(),
    }
}
