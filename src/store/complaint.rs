//! Complaint intake desk

use std::sync::RwLock;

use chrono::Utc;

use crate::model::{Complaint, ComplaintStatus};
use crate::store::StoreError;

/// Name used when the reporter leaves theirs out
const ANONYMOUS: &str = "Anonymous";

struct DeskState {
    complaints: Vec<Complaint>,
    next_id: u64,
}

/// Filed complaints about misinformation and harmful content.
///
/// Newest complaints come first, matching the intake page. Status moves only
/// through review tooling outside this demo, so submissions always enter as
/// `Submitted`.
pub struct ComplaintDesk {
    inner: RwLock<DeskState>,
}

impl ComplaintDesk {
    /// Desk pre-loaded with the demo complaints.
    pub fn seeded() -> Self {
        let complaints = vec![
            Complaint {
                id: 1,
                name: "Anonymous User".to_string(),
                category: "Fake News".to_string(),
                description: "False news about celebrity death circulating on WhatsApp."
                    .to_string(),
                status: ComplaintStatus::UnderReview,
                date: "30 Jan 2026".to_string(),
            },
            Complaint {
                id: 2,
                name: "Rahul Sharma".to_string(),
                category: "Deepfake".to_string(),
                description: "AI-generated video of a political leader spreading misinformation."
                    .to_string(),
                status: ComplaintStatus::Submitted,
                date: "29 Jan 2026".to_string(),
            },
        ];

        Self {
            inner: RwLock::new(DeskState {
                complaints,
                next_id: 3,
            }),
        }
    }

    /// All complaints, newest first.
    pub fn list(&self) -> Vec<Complaint> {
        self.inner.read().expect("desk lock").complaints.clone()
    }

    /// File a new complaint. Category and description are required; the name
    /// is optional.
    pub fn submit(
        &self,
        name: Option<&str>,
        category: &str,
        description: &str,
    ) -> Result<Complaint, StoreError> {
        if category.trim().is_empty() {
            return Err(StoreError::MissingField("category"));
        }
        if description.trim().is_empty() {
            return Err(StoreError::MissingField("description"));
        }

        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => ANONYMOUS.to_string(),
        };

        let mut state = self.inner.write().expect("desk lock");

        let complaint = Complaint {
            id: state.next_id,
            name,
            category: category.trim().to_string(),
            description: description.trim().to_string(),
            status: ComplaintStatus::Submitted,
            date: Utc::now().format("%-d %b %Y").to_string(),
        };
        state.next_id += 1;
        state.complaints.insert(0, complaint.clone());

        tracing::info!(id = complaint.id, category = %complaint.category, "Complaint filed");

        Ok(complaint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_desk_lists_newest_first() {
        let desk = ComplaintDesk::seeded();
        let complaints = desk.list();
        assert_eq!(complaints.len(), 2);
        assert_eq!(complaints[0].id, 1);
        assert_eq!(complaints[0].status, ComplaintStatus::UnderReview);
    }

    #[test]
    fn test_submission_prepends_and_assigns_fresh_id() {
        let desk = ComplaintDesk::seeded();
        let filed = desk
            .submit(Some("Priya"), "Scam", "Lottery message asking for bank details")
            .unwrap();

        assert_eq!(filed.id, 3);
        assert_eq!(filed.status, ComplaintStatus::Submitted);

        let complaints = desk.list();
        assert_eq!(complaints.len(), 3);
        assert_eq!(complaints[0].id, filed.id);
    }

    #[test]
    fn test_missing_name_defaults_to_anonymous() {
        let desk = ComplaintDesk::seeded();
        let filed = desk.submit(None, "Impersonation", "Fake profile of a journalist").unwrap();
        assert_eq!(filed.name, "Anonymous");

        let blank = desk.submit(Some("  "), "Scam", "Phishing link").unwrap();
        assert_eq!(blank.name, "Anonymous");
    }

    #[test]
    fn test_required_fields_are_enforced() {
        let desk = ComplaintDesk::seeded();
        assert!(matches!(
            desk.submit(None, "", "something happened"),
            Err(StoreError::MissingField("category"))
        ));
        assert!(matches!(
            desk.submit(None, "Fake News", "  "),
            Err(StoreError::MissingField("description"))
        ));
        assert_eq!(desk.list().len(), 2);
    }

    #[test]
    fn test_ids_stay_unique_across_submissions() {
        let desk = ComplaintDesk::seeded();
        let a = desk.submit(None, "Scam", "first").unwrap();
        let b = desk.submit(None, "Scam", "second").unwrap();
        assert_ne!(a.id, b.id);
    }
}
