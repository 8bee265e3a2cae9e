//! Legal review docket

use crate::model::{AdvisoryVerdict, CaseStatus, LegalCase, LegalRisk};
use crate::store::StoreError;

/// Court-assisted intake view of flagged misinformation cases.
///
/// The docket is static for the demo; cases enter it through processes
/// outside this service.
pub struct LegalDocket {
    cases: Vec<LegalCase>,
}

impl LegalDocket {
    /// Docket pre-loaded with the demo cases.
    pub fn seeded() -> Self {
        let cases = vec![
            LegalCase {
                id: "MDRS-2026-001".to_string(),
                content_type: "Health Misinformation".to_string(),
                summary: "Viral posts promoting an unproven cure while claiming hospitals \
                          suppress it."
                    .to_string(),
                verdict: AdvisoryVerdict::Fake,
                risk: LegalRisk::High,
                laws: vec!["IT Act 66D".to_string(), "IPC 505(1)".to_string()],
                status: CaseStatus::PendingReview,
            },
            LegalCase {
                id: "MDRS-2026-002".to_string(),
                content_type: "Political Deepfake".to_string(),
                summary: "Synthetic video of a political leader circulated ahead of polling."
                    .to_string(),
                verdict: AdvisoryVerdict::UnderInvestigation,
                risk: LegalRisk::Medium,
                laws: vec!["IPC 171G".to_string()],
                status: CaseStatus::Escalated,
            },
            LegalCase {
                id: "MDRS-2026-003".to_string(),
                content_type: "Public Panic Rumor".to_string(),
                summary: "Messages warning of an imminent earthquake attributed to no agency."
                    .to_string(),
                verdict: AdvisoryVerdict::Fake,
                risk: LegalRisk::High,
                laws: vec!["Disaster Management Act".to_string()],
                status: CaseStatus::Reviewed,
            },
        ];

        Self { cases }
    }

    pub fn list(&self) -> Vec<LegalCase> {
        self.cases.clone()
    }

    pub fn get(&self, id: &str) -> Result<LegalCase, StoreError> {
        self.cases
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("case {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_docket_has_unique_case_ids() {
        let docket = LegalDocket::seeded();
        let cases = docket.list();
        assert_eq!(cases.len(), 3);

        let mut ids: Vec<&str> = cases.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_lookup_by_case_id() {
        let docket = LegalDocket::seeded();
        let case = docket.get("MDRS-2026-002").unwrap();
        assert_eq!(case.content_type, "Political Deepfake");
        assert_eq!(case.status, CaseStatus::Escalated);
    }

    #[test]
    fn test_unknown_case_fails() {
        let docket = LegalDocket::seeded();
        assert!(matches!(
            docket.get("MDRS-1999-999"),
            Err(StoreError::NotFound(_))
        ));
    }
}
