//! Suspicion scoring over title and description

/// Fixed vocabulary of sensational phrases
pub const SUSPICIOUS_PHRASES: &[&str] = &[
    "shocking",
    "breaking!!!",
    "you won't believe",
    "miracle",
    "exposed",
    "secret",
    "hoax",
];

/// Count vocabulary phrases present in either field.
///
/// A phrase contributes exactly 1 whether it appears in the title, the
/// description, or both, so the score is bounded by the vocabulary size.
/// Matching is case-insensitive substring containment; no tokenization,
/// stemming, or partial matching. Missing fields score as empty strings.
pub fn suspicion_score(title: Option<&str>, description: Option<&str>) -> u32 {
    let title = title.unwrap_or("").to_lowercase();
    let description = description.unwrap_or("").to_lowercase();

    SUSPICIOUS_PHRASES
        .iter()
        .filter(|phrase| title.contains(*phrase) || description.contains(*phrase))
        .count() as u32
}
