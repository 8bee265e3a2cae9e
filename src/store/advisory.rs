//! Authority advisory board with public discussion

use std::collections::HashMap;
use std::sync::RwLock;

use crate::model::{Advisory, AdvisoryVerdict, Comment};
use crate::store::StoreError;

struct BoardState {
    advisories: Vec<Advisory>,
    comments: HashMap<u64, Vec<Comment>>,
    next_comment_id: u64,
}

/// Advisories published by cyber authorities, plus per-advisory comments.
///
/// Seeded at session start; advisories themselves are read-only, comments
/// append.
pub struct AdvisoryBoard {
    inner: RwLock<BoardState>,
}

impl AdvisoryBoard {
    /// Board pre-loaded with the demo advisories.
    pub fn seeded() -> Self {
        let advisories = vec![
            Advisory {
                id: 1,
                title: "False Rumors About Celebrity Death Circulating Online".to_string(),
                content: "Cyber authorities have identified viral messages claiming the death of \
                          a public figure due to illness. After verification with official \
                          sources and family statements, this claim has been found to be false. \
                          Citizens are advised not to forward such messages."
                    .to_string(),
                verdict: AdvisoryVerdict::Fake,
                issued_by: "Cyber Crime Cell, India".to_string(),
                timestamp: "30 Jan 2026".to_string(),
            },
            Advisory {
                id: 2,
                title: "Fake Government Cash Transfer Messages on WhatsApp".to_string(),
                content: "Messages claiming that the government is offering \u{20b9}5000 to all \
                          citizens via a registration link are false. No such scheme has been \
                          announced by any official department. These messages are part of an \
                          online scam."
                    .to_string(),
                verdict: AdvisoryVerdict::Fake,
                issued_by: "Ministry of Electronics & IT".to_string(),
                timestamp: "28 Jan 2026".to_string(),
            },
            Advisory {
                id: 3,
                title: "Earthquake Alert Messages - Clarification Issued".to_string(),
                content: "Social media posts warning of an imminent earthquake are misleading. \
                          Earthquakes cannot be predicted with precise timing. Citizens are \
                          advised to rely only on official alerts from authorized agencies."
                    .to_string(),
                verdict: AdvisoryVerdict::Verified,
                issued_by: "National Disaster Management Authority".to_string(),
                timestamp: "26 Jan 2026".to_string(),
            },
            Advisory {
                id: 4,
                title: "Deepfake Video Circulating of Political Leader".to_string(),
                content: "A manipulated video of a political leader is circulating online. \
                          Preliminary analysis indicates signs of synthetic media. The matter is \
                          currently under investigation."
                    .to_string(),
                verdict: AdvisoryVerdict::UnderInvestigation,
                issued_by: "Election Cyber Monitoring Cell".to_string(),
                timestamp: "25 Jan 2026".to_string(),
            },
        ];

        Self {
            inner: RwLock::new(BoardState {
                advisories,
                comments: HashMap::new(),
                next_comment_id: 1,
            }),
        }
    }

    pub fn list(&self) -> Vec<Advisory> {
        self.inner.read().expect("board lock").advisories.clone()
    }

    pub fn get(&self, id: u64) -> Result<Advisory, StoreError> {
        self.inner
            .read()
            .expect("board lock")
            .advisories
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("advisory {id}")))
    }

    /// Comments on one advisory, oldest first.
    pub fn comments(&self, advisory_id: u64) -> Result<Vec<Comment>, StoreError> {
        let state = self.inner.read().expect("board lock");

        if !state.advisories.iter().any(|a| a.id == advisory_id) {
            return Err(StoreError::NotFound(format!("advisory {advisory_id}")));
        }

        Ok(state
            .comments
            .get(&advisory_id)
            .cloned()
            .unwrap_or_default())
    }

    /// Append a public comment. Blank input is rejected.
    pub fn add_comment(&self, advisory_id: u64, text: &str) -> Result<Comment, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::MissingField("text"));
        }

        let mut state = self.inner.write().expect("board lock");

        if !state.advisories.iter().any(|a| a.id == advisory_id) {
            return Err(StoreError::NotFound(format!("advisory {advisory_id}")));
        }

        let comment = Comment {
            id: state.next_comment_id,
            text: text.to_string(),
        };
        state.next_comment_id += 1;
        state
            .comments
            .entry(advisory_id)
            .or_default()
            .push(comment.clone());

        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_board_has_unique_ids() {
        let board = AdvisoryBoard::seeded();
        let advisories = board.list();
        assert_eq!(advisories.len(), 4);

        let mut ids: Vec<u64> = advisories.iter().map(|a| a.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), advisories.len());
    }

    #[test]
    fn test_get_unknown_advisory_fails() {
        let board = AdvisoryBoard::seeded();
        assert!(matches!(board.get(99), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_comment_ids_are_monotonic_across_advisories() {
        let board = AdvisoryBoard::seeded();
        let first = board.add_comment(1, "Is this confirmed?").unwrap();
        let second = board.add_comment(2, "Saw this on WhatsApp too").unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_blank_comment_is_rejected() {
        let board = AdvisoryBoard::seeded();
        assert!(matches!(
            board.add_comment(1, "   "),
            Err(StoreError::MissingField("text"))
        ));
        assert!(board.comments(1).unwrap().is_empty());
    }

    #[test]
    fn test_comment_on_unknown_advisory_fails() {
        let board = AdvisoryBoard::seeded();
        assert!(matches!(
            board.add_comment(42, "hello"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_comments_stay_with_their_advisory() {
        let board = AdvisoryBoard::seeded();
        board.add_comment(1, "first").unwrap();
        board.add_comment(3, "other thread").unwrap();

        let on_first = board.comments(1).unwrap();
        assert_eq!(on_first.len(), 1);
        assert_eq!(on_first[0].text, "first");
        assert_eq!(board.comments(2).unwrap().len(), 0);
    }
}
