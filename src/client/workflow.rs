//! Submit-then-enrich flow used when a reviewer opens a new complaint.

use serde::Serialize;

use crate::adapter::analyze_backend_response;
use crate::client::api::ComplaintApi;
use crate::types::{AnalyzedComplaint, PipelineStage, SimilarComplaint};
use crate::Result;

/// What a reviewer sees after submitting a complaint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintWorkspace {
    pub complaint: AnalyzedComplaint,
    pub similar_complaints: Vec<SimilarComplaint>,
    pub pipeline: Vec<PipelineStage>,
}

/// Submit `text`, adapt the analysis, then look up similar complaints.
///
/// The similarity lookup only runs when the backend assigned an id, and its
/// failure never fails the workflow.
pub async fn open_complaint(
    api: &dyn ComplaintApi,
    text: &str,
    similar_limit: Option<u32>,
) -> Result<ComplaintWorkspace> {
    let backend = api.submit_complaint(text).await?;
    let complaint = analyze_backend_response(&backend);

    let similar_complaints = match complaint.record.backend_id {
        Some(id) => api.find_similar_complaints(id, similar_limit).await,
        None => Vec::new(),
    };

    let pipeline = crate::types::pipeline_stages(
        complaint.record.status.as_ref(),
        complaint.record.health.as_ref(),
    );

    Ok(ComplaintWorkspace {
        complaint,
        similar_complaints,
        pipeline,
    })
}
