use async_trait::async_trait;

use crate::client::core::TriageClient;
use crate::types::{BackendComplaintResponse, SimilarComplaint};
use crate::Result;

/// The complaint operations a caller depends on, abstracted over the transport.
///
/// [`TriageClient`] is the production implementation; front ends and tests can
/// substitute their own.
#[async_trait]
pub trait ComplaintApi: Send + Sync {
    async fn submit_complaint(&self, text: &str) -> Result<BackendComplaintResponse>;

    /// Never fails; an unavailable similarity service yields an empty list.
    async fn find_similar_complaints(
        &self,
        complaint_id: i64,
        limit: Option<u32>,
    ) -> Vec<SimilarComplaint>;

    async fn edit_complaint_response(
        &self,
        complaint_id: i64,
        edited_response: &str,
        reason: &str,
    ) -> Result<serde_json::Value>;

    async fn approve_complaint(&self, complaint_id: i64, notes: Option<&str>) -> Result<()>;

    async fn reject_complaint(&self, complaint_id: i64, notes: Option<&str>) -> Result<()>;
}

#[async_trait]
impl ComplaintApi for TriageClient {
    async fn submit_complaint(&self, text: &str) -> Result<BackendComplaintResponse> {
        TriageClient::submit_complaint(self, text).await
    }

    async fn find_similar_complaints(
        &self,
        complaint_id: i64,
        limit: Option<u32>,
    ) -> Vec<SimilarComplaint> {
        TriageClient::find_similar_complaints(self, complaint_id, limit).await
    }

    async fn edit_complaint_response(
        &self,
        complaint_id: i64,
        edited_response: &str,
        reason: &str,
    ) -> Result<serde_json::Value> {
        TriageClient::edit_complaint_response(self, complaint_id, edited_response, reason).await
    }

    async fn approve_complaint(&self, complaint_id: i64, notes: Option<&str>) -> Result<()> {
        TriageClient::approve_complaint(self, complaint_id, notes).await
    }

    async fn reject_complaint(&self, complaint_id: i64, notes: Option<&str>) -> Result<()> {
        TriageClient::reject_complaint(self, complaint_id, notes).await
    }
}
