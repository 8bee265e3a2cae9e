//! Heuristic analysis pipeline: suspicion scoring, source trust, verdict.
//!
//! Everything here is a pure function of its inputs. There is no shared
//! state, so concurrent analyze requests need no coordination.

mod scorer;
mod trust;
mod verdict;

pub use scorer::{SUSPICIOUS_PHRASES, suspicion_score};
pub use trust::{TRUSTED_SOURCES, is_trusted_source};
pub use verdict::resolve_verdict;

use crate::model::{AnalysisResult, AnalyzeRequest, Signals};

/// Run the full heuristic over one analyze request.
pub fn analyze(request: &AnalyzeRequest) -> AnalysisResult {
    let score = suspicion_score(request.title.as_deref(), request.description.as_deref());
    let trusted = is_trusted_source(request.source.as_deref());
    let verdict = resolve_verdict(score, trusted);

    tracing::debug!(
        suspicious_score = score,
        trusted_source = trusted,
        verdict = %verdict,
        "Scored analyze request"
    );

    AnalysisResult {
        verdict,
        confidence: verdict.confidence().to_string(),
        signals: Signals {
            suspicious_score: score,
            trusted_source: trusted,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Verdict;

    #[test]
    fn test_all_fields_missing_yields_unverified() {
        let result = analyze(&AnalyzeRequest::default());
        assert_eq!(result.verdict, Verdict::Unverified);
        assert_eq!(result.confidence, "0.55");
        assert_eq!(result.signals.suspicious_score, 0);
        assert!(!result.signals.trusted_source);
    }

    #[test]
    fn test_clean_trusted_article_is_real() {
        let request = AnalyzeRequest {
            title: Some("Parliament passes budget".to_string()),
            description: Some("The annual budget was approved on Tuesday.".to_string()),
            source: Some("https://www.bbc.co.uk/news".to_string()),
        };
        let result = analyze(&request);
        assert_eq!(result.verdict, Verdict::Real);
        assert_eq!(result.confidence, "0.85");
    }

    #[test]
    fn test_sensational_untrusted_article_is_likely_fake() {
        let request = AnalyzeRequest {
            title: Some("SHOCKING secret exposed".to_string()),
            description: None,
            source: Some("viral-news.example".to_string()),
        };
        let result = analyze(&request);
        assert_eq!(result.verdict, Verdict::LikelyFake);
        assert_eq!(result.confidence, "0.30");
        assert_eq!(result.signals.suspicious_score, 3);
    }
}
