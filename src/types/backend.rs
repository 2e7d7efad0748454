//! Wire schema of the triage backend.
//!
//! Field names on the wire are Turkish snake_case (plus a camelCase
//! `maskedText`); they are renamed to English here. Everything except the
//! category/priority codes is optional on the wire, and `null` is accepted
//! wherever a default makes sense.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response of `POST /api/sikayet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendComplaintResponse {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(rename = "maskedText", default, deserialize_with = "null_as_default")]
    pub masked_text: String,

    #[serde(rename = "kategori", default, deserialize_with = "null_as_default")]
    pub category_code: String,

    #[serde(rename = "oncelik", default, deserialize_with = "null_as_default")]
    pub priority_code: String,

    #[serde(rename = "oneri", default, deserialize_with = "null_as_default")]
    pub suggestion: String,

    #[serde(rename = "durum", default)]
    pub status: Option<String>,

    #[serde(rename = "kaynaklar", default, deserialize_with = "null_as_default")]
    pub sources: Vec<BackendSource>,

    #[serde(
        rename = "insan_incelemesi_gerekli",
        default,
        deserialize_with = "null_as_default"
    )]
    pub needs_human_review: bool,

    #[serde(default)]
    pub review_id: Option<String>,

    #[serde(rename = "guven_skorlari", default)]
    pub confidence: Option<BackendConfidenceScores>,

    #[serde(rename = "sistem_durumu", default)]
    pub system_status: Option<BackendSystemStatus>,
}

/// A document the backend retrieved in support of its suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendSource {
    #[serde(rename = "dokuman_adi", default)]
    pub document_name: Option<String>,
    #[serde(rename = "kaynak", default)]
    pub origin: Option<String>,
    #[serde(rename = "ozet", default)]
    pub summary: Option<String>,
}

/// Per-dimension classifier confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfidenceScores {
    #[serde(rename = "kategori", default)]
    pub category: Option<f64>,
    #[serde(rename = "oncelik", default)]
    pub priority: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSystemStatus {
    #[serde(rename = "rag_durumu", default)]
    pub retrieval: Option<String>,
    #[serde(rename = "llm_durumu", default)]
    pub generation: Option<String>,
}

/// One hit of the similarity search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarComplaint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub masked_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub similarity_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

/// Envelope of `GET /api/complaints/{id}/similar`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimilarComplaintsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub similar_complaints: Vec<SimilarComplaint>,
}
