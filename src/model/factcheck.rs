use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Category of an extracted factual claim.
///
/// The extractor may emit categories beyond the known set; those deserialize
/// to [`ClaimKind::Other`] instead of failing the whole claim list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClaimKind {
    Death,
    Health,
    Event,
    #[serde(other)]
    Other,
}

impl ClaimKind {
    /// Death and illness claims get the strictest handling in the pipeline.
    pub fn is_high_risk(&self) -> bool {
        matches!(self, ClaimKind::Death | ClaimKind::Health)
    }
}

/// One factual assertion extracted from content
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claim {
    #[serde(rename = "type")]
    pub kind: ClaimKind,
    pub claim: String,
}

/// Outcome of searching for supporting evidence for one claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    NoEvidenceFound,
}

/// One claim annotated with its evidence-search outcome
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClaimVerification {
    pub claim: String,
    #[serde(rename = "type")]
    pub kind: ClaimKind,
    pub status: VerificationStatus,
}

/// Body of a fact-check request. At least one of the fields is required.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct FactCheckRequest {
    pub text: Option<String>,
    pub url: Option<String>,
}

/// Conclusion of the fact-check pipeline.
///
/// Unlike the analyze heuristic this never concludes `Real`: absence of
/// contradicting evidence only ever upgrades to `Unverified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum FactVerdict {
    Fake,
    Unverified,
}

impl fmt::Display for FactVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactVerdict::Fake => write!(f, "Fake"),
            FactVerdict::Unverified => write!(f, "Unverified"),
        }
    }
}

/// Response of a fact-check request
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FactCheckReport {
    pub verdict: FactVerdict,
    pub claims: Vec<ClaimVerification>,
    pub reason: String,
}
