use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of an analyze request.
///
/// Every field is optional; a missing field is scored as an empty string and
/// never rejects the request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
}

/// Heuristic conclusion about content trustworthiness.
///
/// Serialized with the exact labels clients display, including the space in
/// `"Likely Fake"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Verdict {
    Real,
    Unverified,
    #[serde(rename = "Likely Fake")]
    LikelyFake,
}

impl Verdict {
    /// Fixed confidence per verdict bucket.
    ///
    /// Confidence is a lookup on the final verdict only; the suspicion score
    /// magnitude never feeds into it.
    pub fn confidence(&self) -> &'static str {
        match self {
            Verdict::Real => "0.85",
            Verdict::LikelyFake => "0.30",
            Verdict::Unverified => "0.55",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Real => write!(f, "Real"),
            Verdict::Unverified => write!(f, "Unverified"),
            Verdict::LikelyFake => write!(f, "Likely Fake"),
        }
    }
}

/// Intermediate signals exposed alongside the verdict for diagnostics
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Signals {
    pub suspicious_score: u32,
    pub trusted_source: bool,
}

/// Response of an analyze request. Never stored server-side.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    pub confidence: String,
    pub signals: Signals,
}
