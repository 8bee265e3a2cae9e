//! Claim extraction from free text
//!
//! The LLM does the extraction; a keyword fallback guarantees that death and
//! illness rumors are never silently dropped when the model output cannot be
//! parsed.

use regex::Regex;

use crate::model::{Claim, ClaimKind};
use crate::service::llm::LlmClient;

/// Keywords that force a synthesized claim when extraction comes back empty
pub const HIGH_RISK_KEYWORDS: &[&str] = &["died", "death", "cancer", "killed", "murder"];

/// Claim synthesized by the keyword fallback
const FALLBACK_CLAIM: &str = "An unnamed person reportedly died due to illness";

/// Extract factual claims from `text`.
///
/// Unparseable or failed LLM output degrades to an empty list; the high-risk
/// keyword fallback then decides whether to synthesize a death claim. This
/// function itself never fails.
pub async fn extract_claims(llm: &LlmClient, text: &str) -> Vec<Claim> {
    let raw = match llm.generate(&extraction_prompt(text)).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "Claim extraction failed, using fallback");
            String::new()
        }
    };

    let mut claims = parse_claims(&raw);

    if claims.is_empty() && contains_high_risk_keyword(text) {
        tracing::debug!("No parseable claims but high-risk keywords present, synthesizing claim");
        claims = vec![Claim {
            kind: ClaimKind::Death,
            claim: FALLBACK_CLAIM.to_string(),
        }];
    }

    claims
}

fn extraction_prompt(text: &str) -> String {
    format!(
        r#"You are an information extraction system.

Task:
Extract ALL factual claims from the text, even if:
- The person is unnamed
- The claim is anonymous
- The claim may be false
- The claim is a rumor or allegation

Rules:
- Death, illness, or crime claims MUST be extracted
- Do NOT verify
- Do NOT judge truth
- Output ONLY valid JSON
- Never return an empty list if any factual assertion exists

Format:
[
  {{ "type": "death/health/event", "claim": "..." }}
]

Text:
{text}"#
    )
}

/// Parse the model output into claims.
///
/// Tries the whole output as a JSON array first, then the outermost
/// bracketed span (models often wrap the array in prose or code fences).
fn parse_claims(raw: &str) -> Vec<Claim> {
    let trimmed = raw.trim();

    if let Ok(claims) = serde_json::from_str::<Vec<Claim>>(trimmed) {
        return claims;
    }

    let array_span = Regex::new(r"(?s)\[.*\]").expect("valid regex");
    if let Some(found) = array_span.find(trimmed) {
        if let Ok(claims) = serde_json::from_str::<Vec<Claim>>(found.as_str()) {
            return claims;
        }
    }

    Vec::new()
}

/// True iff `text` mentions any high-risk keyword, case-insensitively.
pub fn contains_high_risk_keyword(text: &str) -> bool {
    let text = text.to_lowercase();
    HIGH_RISK_KEYWORDS.iter().any(|k| text.contains(k))
}
