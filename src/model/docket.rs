//! Records backing the advisory, complaint, and legal review desks.
//!
//! All of these are ephemeral session-scoped data; ids are unique within
//! their owning store and there are no relationships across entity kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Label an authority attaches to an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AdvisoryVerdict {
    Fake,
    Verified,
    #[serde(rename = "Under Investigation")]
    UnderInvestigation,
}

impl fmt::Display for AdvisoryVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisoryVerdict::Fake => write!(f, "Fake"),
            AdvisoryVerdict::Verified => write!(f, "Verified"),
            AdvisoryVerdict::UnderInvestigation => write!(f, "Under Investigation"),
        }
    }
}

/// One advisory published by a cyber authority
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Advisory {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub verdict: AdvisoryVerdict,
    pub issued_by: String,
    pub timestamp: String,
}

/// Public discussion comment attached to an advisory
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Comment {
    pub id: u64,
    pub text: String,
}

/// Processing state of a filed complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ComplaintStatus {
    Submitted,
    #[serde(rename = "Under Review")]
    UnderReview,
    Resolved,
}

/// One filed complaint about misinformation or harmful content
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Complaint {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub date: String,
}

/// Legal exposure attributed to a docket case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LegalRisk {
    High,
    Medium,
    Low,
}

/// Review state of a docket case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CaseStatus {
    #[serde(rename = "Pending Review")]
    PendingReview,
    Escalated,
    Reviewed,
}

/// One misinformation case on the legal review docket
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LegalCase {
    pub id: String,
    pub content_type: String,
    /// Short description of the flagged content, used for evidence snapshots
    pub summary: String,
    pub verdict: AdvisoryVerdict,
    pub risk: LegalRisk,
    pub laws: Vec<String>,
    pub status: CaseStatus,
}
