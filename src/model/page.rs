use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum number of characters of visible page text carried in a snapshot
pub const PAGE_TEXT_MAX_CHARS: usize = 5000;

/// One captured page, owned by the requesting client for a single round trip.
///
/// Never persisted. Construction enforces the text cap so no snapshot longer
/// than [`PAGE_TEXT_MAX_CHARS`] can exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageSnapshot {
    pub url: String,
    pub title: String,
    pub text: String,
}

impl PageSnapshot {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            text: truncate_chars(text.into(), PAGE_TEXT_MAX_CHARS),
        }
    }
}

/// Truncate to at most `max` characters, respecting char boundaries.
fn truncate_chars(mut text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => {
            text.truncate(idx);
            text
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        let snapshot = PageSnapshot::new("https://example.com", "Title", "short body");
        assert_eq!(snapshot.text, "short body");
    }

    #[test]
    fn test_long_text_truncated_to_exactly_the_cap() {
        let long = "a".repeat(PAGE_TEXT_MAX_CHARS + 1000);
        let snapshot = PageSnapshot::new("https://example.com", "Title", long);
        assert_eq!(snapshot.text.chars().count(), PAGE_TEXT_MAX_CHARS);
    }

    #[test]
    fn test_text_at_the_cap_unchanged() {
        let exact = "b".repeat(PAGE_TEXT_MAX_CHARS);
        let snapshot = PageSnapshot::new("https://example.com", "Title", exact.clone());
        assert_eq!(snapshot.text, exact);
    }

    #[test]
    fn test_truncation_respects_multibyte_chars() {
        let long = "é".repeat(PAGE_TEXT_MAX_CHARS + 10);
        let snapshot = PageSnapshot::new("https://example.com", "Title", long);
        assert_eq!(snapshot.text.chars().count(), PAGE_TEXT_MAX_CHARS);
    }
}
