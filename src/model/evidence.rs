use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::factcheck::ClaimVerification;

/// Fixed disclaimer carried by every evidence pack
pub const LEGAL_NOTE: &str = "This document is AI-assisted and intended for investigative support \
     only. It does not constitute a legal determination.";

/// Confidence attributed to a pack as a whole.
///
/// `High` is reserved for packs whose final verdict is Fake; everything else
/// is `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum EvidenceConfidence {
    High,
    Medium,
}

/// Case record assembled for investigative hand-off.
///
/// Generated on demand and returned to the caller; never stored.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EvidencePack {
    pub case_id: String,
    pub generated_at: DateTime<Utc>,
    pub content_snapshot: String,
    pub claims_analyzed: Vec<ClaimVerification>,
    pub final_verdict: String,
    pub analysis_reason: String,
    pub confidence_level: EvidenceConfidence,
    pub legal_note: String,
}
