//! Processing status and subsystem health reported by the backend.

use serde::{Deserialize, Serialize};

use super::backend::BackendSystemStatus;

/// Lifecycle status of a complaint record (`durum` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    Analyzed,
    MaskingFailed,
    Edited,
    Approved,
    Rejected,
    #[serde(untagged)]
    Other(String),
}

impl ComplaintStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "ANALYZED" => ComplaintStatus::Analyzed,
            "MASKING_FAILED" => ComplaintStatus::MaskingFailed,
            "EDITED" => ComplaintStatus::Edited,
            "APPROVED" => ComplaintStatus::Approved,
            "REJECTED" => ComplaintStatus::Rejected,
            other => ComplaintStatus::Other(other.to_string()),
        }
    }
}

/// State of one backend subsystem (retrieval or generation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubsystemState {
    Ok,
    Unavailable,
    TemplateFallback,
    #[serde(untagged)]
    Other(String),
}

impl SubsystemState {
    pub fn from_code(code: &str) -> Self {
        match code {
            "OK" => SubsystemState::Ok,
            "UNAVAILABLE" => SubsystemState::Unavailable,
            "TEMPLATE_FALLBACK" => SubsystemState::TemplateFallback,
            other => SubsystemState::Other(other.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, SubsystemState::Ok)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealth {
    pub retrieval: Option<SubsystemState>,
    pub generation: Option<SubsystemState>,
}

impl SystemHealth {
    pub fn from_backend(status: &BackendSystemStatus) -> Self {
        Self {
            retrieval: status.retrieval.as_deref().map(SubsystemState::from_code),
            generation: status.generation.as_deref().map(SubsystemState::from_code),
        }
    }

    /// True when a reported subsystem is anything other than `OK`.
    pub fn is_degraded(&self) -> bool {
        [&self.retrieval, &self.generation]
            .into_iter()
            .flatten()
            .any(|s| !s.is_ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageState {
    Pending,
    Ok,
    Warning,
    Failed,
}

/// One step of the backend analysis pipeline as observed by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineStage {
    pub id: &'static str,
    pub state: StageState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl PipelineStage {
    fn new(id: &'static str, state: StageState) -> Self {
        Self {
            id,
            state,
            detail: None,
        }
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

fn subsystem_stage(
    id: &'static str,
    state: Option<&SubsystemState>,
    unavailable: StageState,
) -> PipelineStage {
    match state {
        None => PipelineStage::new(id, StageState::Pending),
        Some(SubsystemState::Ok) => PipelineStage::new(id, StageState::Ok),
        Some(SubsystemState::Unavailable) => {
            PipelineStage::new(id, unavailable).with_detail("UNAVAILABLE")
        }
        Some(SubsystemState::TemplateFallback) => {
            PipelineStage::new(id, StageState::Warning).with_detail("TEMPLATE_FALLBACK")
        }
        Some(SubsystemState::Other(code)) => {
            PipelineStage::new(id, StageState::Warning).with_detail(code.clone())
        }
    }
}

/// Masking, triage, retrieval and generation, in execution order.
///
/// A masking failure stops the backend pipeline, so every later stage stays
/// `Pending`. Retrieval is optional for the backend (a miss degrades to a
/// warning) while an unavailable generator fails the stage.
pub fn pipeline_stages(
    status: Option<&ComplaintStatus>,
    health: Option<&SystemHealth>,
) -> Vec<PipelineStage> {
    if matches!(status, Some(ComplaintStatus::MaskingFailed)) {
        return vec![
            PipelineStage::new("masking", StageState::Failed).with_detail("MASKING_FAILED"),
            PipelineStage::new("triage", StageState::Pending),
            PipelineStage::new("retrieval", StageState::Pending),
            PipelineStage::new("generation", StageState::Pending),
        ];
    }

    let masking = match status {
        Some(_) => StageState::Ok,
        None => StageState::Pending,
    };

    vec![
        PipelineStage::new("masking", masking),
        PipelineStage::new("triage", masking),
        subsystem_stage(
            "retrieval",
            health.and_then(|h| h.retrieval.as_ref()),
            StageState::Warning,
        ),
        subsystem_stage(
            "generation",
            health.and_then(|h| h.generation.as_ref()),
            StageState::Failed,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(rag: &str, llm: &str) -> SystemHealth {
        SystemHealth::from_backend(&BackendSystemStatus {
            retrieval: Some(rag.to_string()),
            generation: Some(llm.to_string()),
        })
    }

    #[test]
    fn parses_known_and_unknown_codes() {
        assert_eq!(ComplaintStatus::from_code("ANALYZED"), ComplaintStatus::Analyzed);
        assert_eq!(
            ComplaintStatus::from_code("ARCHIVED"),
            ComplaintStatus::Other("ARCHIVED".into())
        );
        assert_eq!(
            SubsystemState::from_code("TEMPLATE_FALLBACK"),
            SubsystemState::TemplateFallback
        );
    }

    #[test]
    fn degraded_when_any_subsystem_is_not_ok() {
        assert!(!health("OK", "OK").is_degraded());
        assert!(health("UNAVAILABLE", "OK").is_degraded());
        assert!(health("OK", "TEMPLATE_FALLBACK").is_degraded());
        assert!(!SystemHealth {
            retrieval: None,
            generation: None
        }
        .is_degraded());
    }

    #[test]
    fn healthy_pipeline_is_all_ok() {
        let h = health("OK", "OK");
        let stages = pipeline_stages(Some(&ComplaintStatus::Analyzed), Some(&h));
        let ids: Vec<_> = stages.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["masking", "triage", "retrieval", "generation"]);
        assert!(stages.iter().all(|s| s.state == StageState::Ok));
    }

    #[test]
    fn degraded_subsystems_map_to_warning_or_failure() {
        let h = health("UNAVAILABLE", "UNAVAILABLE");
        let stages = pipeline_stages(Some(&ComplaintStatus::Analyzed), Some(&h));
        assert_eq!(stages[2].state, StageState::Warning);
        assert_eq!(stages[2].detail.as_deref(), Some("UNAVAILABLE"));
        assert_eq!(stages[3].state, StageState::Failed);

        let h = health("OK", "TEMPLATE_FALLBACK");
        let stages = pipeline_stages(Some(&ComplaintStatus::Analyzed), Some(&h));
        assert_eq!(stages[3].state, StageState::Warning);
    }

    #[test]
    fn masking_failure_halts_later_stages() {
        let stages = pipeline_stages(Some(&ComplaintStatus::MaskingFailed), None);
        assert_eq!(stages[0].state, StageState::Failed);
        assert!(stages[1..].iter().all(|s| s.state == StageState::Pending));
    }
}
