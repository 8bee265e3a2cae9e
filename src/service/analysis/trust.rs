//! Source credibility check against the publisher allowlist

/// Publishers treated as credibility boosters
pub const TRUSTED_SOURCES: &[&str] = &["bbc", "cnn", "guardian", "reuters"];

/// True iff `source` contains any allowlisted publisher, case-insensitively.
/// A missing source is never trusted.
pub fn is_trusted_source(source: Option<&str>) -> bool {
    match source {
        Some(source) => {
            let source = source.to_lowercase();
            TRUSTED_SOURCES.iter().any(|name| source.contains(name))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_is_untrusted() {
        assert!(!is_trusted_source(None));
    }

    #[test]
    fn test_allowlisted_publishers_match() {
        for name in TRUSTED_SOURCES {
            assert!(is_trusted_source(Some(name)), "{name} should be trusted");
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(is_trusted_source(Some("BBC News")));
        assert!(is_trusted_source(Some("Reuters")));
    }

    #[test]
    fn test_containment_matches_full_urls() {
        assert!(is_trusted_source(Some("https://www.theguardian.com/world")));
        assert!(is_trusted_source(Some("edition.cnn.com")));
    }

    #[test]
    fn test_unlisted_source_is_untrusted() {
        assert!(!is_trusted_source(Some("daily-truth-bombs.example")));
        assert!(!is_trusted_source(Some("")));
    }
}
