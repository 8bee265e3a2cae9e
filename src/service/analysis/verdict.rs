//! Verdict resolution from the suspicion score and trust signal

use crate::model::Verdict;

/// Map `(score, trusted)` to a verdict.
///
/// Both conditions are evaluated in order and assign over the default; when
/// they overlap the later assignment wins, so a trusted source that still
/// scores >= 2 resolves to `Likely Fake`, never `Real`. Callers observe this
/// ordering, so it must stay sequential assignment rather than an early
/// return on the first match.
pub fn resolve_verdict(score: u32, trusted: bool) -> Verdict {
    let mut verdict = Verdict::Unverified;

    if trusted && score == 0 {
        verdict = Verdict::Real;
    }
    if score >= 2 {
        verdict = Verdict::LikelyFake;
    }

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_trusted_is_real() {
        assert_eq!(resolve_verdict(0, true), Verdict::Real);
    }

    #[test]
    fn test_two_signals_are_likely_fake() {
        assert_eq!(resolve_verdict(2, false), Verdict::LikelyFake);
    }

    #[test]
    fn test_single_signal_is_unverified() {
        assert_eq!(resolve_verdict(1, false), Verdict::Unverified);
    }

    #[test]
    fn test_clean_untrusted_is_unverified() {
        assert_eq!(resolve_verdict(0, false), Verdict::Unverified);
    }

    #[test]
    fn test_trusted_with_single_signal_is_unverified() {
        // trusted requires score == 0 to upgrade; one signal blocks it
        assert_eq!(resolve_verdict(1, true), Verdict::Unverified);
    }

    #[test]
    fn test_last_assignment_wins_for_trusted_high_score() {
        // overlap case: both conditions could fire; the later one must win
        assert_eq!(resolve_verdict(3, true), Verdict::LikelyFake);
        assert_eq!(resolve_verdict(2, true), Verdict::LikelyFake);
    }
}
