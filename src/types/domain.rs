//! Normalized domain types consumed by callers of the client.

use serde::{Deserialize, Serialize};

use super::status::{ComplaintStatus, SystemHealth};

/// Complaint category. Closed set; anything unmapped is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintCategory {
    FraudUnauthorizedTx,
    ChargebackDispute,
    TransferDelay,
    AccessLoginMobile,
    CardLimitCredit,
    InformationRequest,
    CampaignPointsRewards,
    Unknown,
}

impl ComplaintCategory {
    pub const ALL: [ComplaintCategory; 8] = [
        ComplaintCategory::FraudUnauthorizedTx,
        ComplaintCategory::ChargebackDispute,
        ComplaintCategory::TransferDelay,
        ComplaintCategory::AccessLoginMobile,
        ComplaintCategory::CardLimitCredit,
        ComplaintCategory::InformationRequest,
        ComplaintCategory::CampaignPointsRewards,
        ComplaintCategory::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintCategory::FraudUnauthorizedTx => "FRAUD_UNAUTHORIZED_TX",
            ComplaintCategory::ChargebackDispute => "CHARGEBACK_DISPUTE",
            ComplaintCategory::TransferDelay => "TRANSFER_DELAY",
            ComplaintCategory::AccessLoginMobile => "ACCESS_LOGIN_MOBILE",
            ComplaintCategory::CardLimitCredit => "CARD_LIMIT_CREDIT",
            ComplaintCategory::InformationRequest => "INFORMATION_REQUEST",
            ComplaintCategory::CampaignPointsRewards => "CAMPAIGN_POINTS_REWARDS",
            ComplaintCategory::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

/// The backend does not classify sentiment; analyses always carry `Neutral`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Angry,
    #[default]
    Neutral,
    Concerned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestedAction {
    HumanReviewRequired,
    AutoApproveEligible,
}

impl SuggestedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestedAction::HumanReviewRequired => "HUMAN_REVIEW_REQUIRED",
            SuggestedAction::AutoApproveEligible => "AUTO_APPROVE_ELIGIBLE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub category: ComplaintCategory,
    pub priority: Priority,
    pub sentiment: Sentiment,
    /// Mean of the category and priority confidences.
    pub confidence_score: f64,
    pub reasoning: String,
}

/// A knowledge-base document cited in support of a suggested reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KbArticle {
    pub id: String,
    pub title: String,
    pub relevance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub response_draft: String,
    pub actions: Vec<SuggestedAction>,
    pub kb_articles: Vec<KbArticle>,
}

/// Bookkeeping fields of an analyzed complaint, as opposed to its analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintRecord {
    pub backend_id: Option<i64>,
    pub masked_text: String,
    pub status: Option<ComplaintStatus>,
    pub needs_human_review: bool,
    pub review_id: Option<String>,
    pub health: Option<SystemHealth>,
}

/// Everything the client derives from one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedComplaint {
    pub record: ComplaintRecord,
    pub analysis: AnalysisResult,
    pub suggestion: Suggestion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_as_screaming_codes() {
        for category in ComplaintCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::Value::String(category.as_str().into()));
        }
        assert_eq!(
            serde_json::to_value(SuggestedAction::AutoApproveEligible).unwrap(),
            "AUTO_APPROVE_ELIGIBLE"
        );
        assert_eq!(serde_json::to_value(Priority::Critical).unwrap(), "CRITICAL");
    }

    #[test]
    fn kb_article_omits_absent_optionals() {
        let article = KbArticle {
            id: "doc-0".into(),
            title: "Bilinmeyen Doküman".into(),
            relevance: 1.0,
            summary: None,
            source: None,
        };
        let json = serde_json::to_value(&article).unwrap();
        assert!(json.get("summary").is_none());
        assert_eq!(json["relevance"], 1.0);
    }
}
