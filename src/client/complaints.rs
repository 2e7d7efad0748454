//! Complaint operations exposed by the triage backend.

use serde_json::json;
use tracing::{error, info, warn};

use crate::adapter::analyze_backend_response;
use crate::client::core::TriageClient;
use crate::client::options::{RequestOptions, SubmitOptions};
use crate::error::ReviewAction;
use crate::transport::OutboundRequest;
use crate::types::{
    AnalyzedComplaint, BackendComplaintResponse, ComplaintDraft, SimilarComplaint,
    SimilarComplaintsResponse,
};
use crate::{Error, Result};

pub const SUBMIT_PATH: &str = "/api/sikayet";
pub const DEFAULT_SIMILAR_LIMIT: u32 = 5;
/// Header identifying the reviewer on edit requests.
pub const ACTOR_HEADER: &str = "X-User-Id";
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

fn complaint_path(complaint_id: i64, action: &str) -> String {
    format!("/api/complaints/{}/{}", complaint_id, action)
}

impl TriageClient {
    /// Submit complaint text for analysis as a single attempt.
    ///
    /// Text shorter than the minimum length is rejected locally. A non-2xx
    /// answer becomes [`Error::Backend`] with the status and raw body.
    pub async fn submit_complaint(&self, text: &str) -> Result<BackendComplaintResponse> {
        self.submit_complaint_with(text, &SubmitOptions::default())
            .await
    }

    pub async fn submit_complaint_with(
        &self,
        text: &str,
        options: &SubmitOptions,
    ) -> Result<BackendComplaintResponse> {
        let draft = ComplaintDraft::new(text);
        draft.validate()?;

        let mut request =
            OutboundRequest::post(SUBMIT_PATH).with_json(json!({ "metin": draft.text() }));
        if let Some(key) = &options.idempotency_key {
            request = request.with_header(IDEMPOTENCY_HEADER, key.as_str());
        }

        let reply = self.fetch_with_retry(&request, &options.request).await?;
        if !reply.is_success() {
            warn!(http_status = reply.status.as_u16(), "complaint submission rejected");
            return Err(Error::Backend {
                status: reply.status.as_u16(),
                body: reply.body,
            });
        }

        let parsed: BackendComplaintResponse = serde_json::from_str(&reply.body)?;
        info!(
            complaint_id = ?parsed.id,
            category = parsed.category_code.as_str(),
            needs_review = parsed.needs_human_review,
            "complaint submitted"
        );
        Ok(parsed)
    }

    /// Submit and adapt in one step.
    pub async fn analyze_complaint(&self, text: &str) -> Result<AnalyzedComplaint> {
        let backend = self.submit_complaint(text).await?;
        Ok(analyze_backend_response(&backend))
    }

    /// Best-effort similarity lookup: every failure is logged and yields an empty list.
    pub async fn find_similar_complaints(
        &self,
        complaint_id: i64,
        limit: Option<u32>,
    ) -> Vec<SimilarComplaint> {
        match self.try_find_similar_complaints(complaint_id, limit).await {
            Ok(similar) => similar,
            Err(e) => {
                error!(complaint_id, error = %e, "similar complaints service unavailable");
                Vec::new()
            }
        }
    }

    async fn try_find_similar_complaints(
        &self,
        complaint_id: i64,
        limit: Option<u32>,
    ) -> Result<Vec<SimilarComplaint>> {
        let request = OutboundRequest::get(complaint_path(complaint_id, "similar"))
            .with_query("limit", limit.unwrap_or(DEFAULT_SIMILAR_LIMIT));

        let reply = self
            .fetch_with_retry(&request, &RequestOptions::default())
            .await?;
        if !reply.is_success() {
            return Err(Error::Backend {
                status: reply.status.as_u16(),
                body: reply.body,
            });
        }

        let envelope: SimilarComplaintsResponse = serde_json::from_str(&reply.body)?;
        Ok(envelope.similar_complaints)
    }

    /// Replace the drafted customer reply. Returns the edited record as sent by the backend.
    pub async fn edit_complaint_response(
        &self,
        complaint_id: i64,
        edited_response: &str,
        reason: &str,
    ) -> Result<serde_json::Value> {
        let request = OutboundRequest::patch(complaint_path(complaint_id, "edit"))
            .with_header(ACTOR_HEADER, self.config.actor_id.as_str())
            .with_json(json!({
                "customer_reply_draft": edited_response,
                "edit_reason": reason,
            }));

        let reply = self
            .fetch_with_retry(&request, &RequestOptions::default())
            .await?;
        if !reply.is_success() {
            warn!(complaint_id, http_status = reply.status.as_u16(), "edit rejected");
            return Err(Error::ReviewAction {
                action: ReviewAction::Edit,
                status: reply.status.as_u16(),
            });
        }

        if reply.body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&reply.body)?)
    }

    pub async fn approve_complaint(&self, complaint_id: i64, notes: Option<&str>) -> Result<()> {
        self.review_decision(complaint_id, ReviewAction::Approve, notes)
            .await
    }

    pub async fn reject_complaint(&self, complaint_id: i64, notes: Option<&str>) -> Result<()> {
        self.review_decision(complaint_id, ReviewAction::Reject, notes)
            .await
    }

    async fn review_decision(
        &self,
        complaint_id: i64,
        action: ReviewAction,
        notes: Option<&str>,
    ) -> Result<()> {
        let request = OutboundRequest::post(complaint_path(complaint_id, action.as_str()))
            .with_json(json!({ "notes": notes.unwrap_or("") }));

        let reply = self
            .fetch_with_retry(&request, &RequestOptions::default())
            .await?;
        if !reply.is_success() {
            warn!(
                complaint_id,
                action = action.as_str(),
                http_status = reply.status.as_u16(),
                "review decision rejected"
            );
            return Err(Error::ReviewAction {
                action,
                status: reply.status.as_u16(),
            });
        }

        info!(complaint_id, action = action.as_str(), "review decision recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complaint_paths() {
        assert_eq!(complaint_path(12, "similar"), "/api/complaints/12/similar");
        assert_eq!(
            complaint_path(12, ReviewAction::Approve.as_str()),
            "/api/complaints/12/approve"
        );
        assert_eq!(
            complaint_path(12, ReviewAction::Reject.as_str()),
            "/api/complaints/12/reject"
        );
    }

    #[tokio::test]
    async fn short_text_is_rejected_before_any_request() {
        // Nothing listens on this port; a request would surface as a transport error.
        let client = TriageClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let err = client.submit_complaint("çok kısa").await.unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }
}
