//! Evidence pack assembly and rendering for the legal review desk

use chrono::Utc;
use uuid::Uuid;

use crate::model::evidence::LEGAL_NOTE;
use crate::model::{ClaimVerification, EvidenceConfidence, EvidencePack};

/// Characters of snapshot and reason text shown in the rendering
const RENDER_EXCERPT_CHARS: usize = 500;

/// Assemble a pack for one analyzed item.
///
/// Condemned content (final verdict `Fake`) gets `High` pack confidence,
/// anything else `Medium`.
pub fn build_pack(
    content: &str,
    verdict: impl ToString,
    claims: Vec<ClaimVerification>,
    reason: &str,
) -> EvidencePack {
    let final_verdict = verdict.to_string();
    let confidence_level = if final_verdict == "Fake" {
        EvidenceConfidence::High
    } else {
        EvidenceConfidence::Medium
    };

    EvidencePack {
        case_id: new_case_id(),
        generated_at: Utc::now(),
        content_snapshot: content.to_string(),
        claims_analyzed: claims,
        final_verdict,
        analysis_reason: reason.to_string(),
        confidence_level,
        legal_note: LEGAL_NOTE.to_string(),
    }
}

/// Case ids look like `EV-3FA9C12B`.
fn new_case_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("EV-{}", hex[..8].to_uppercase())
}

/// Render a pack as the plain-text document served for download.
pub fn render_text(pack: &EvidencePack) -> String {
    let mut out = String::new();

    out.push_str("EVIDENCE PACK - MISINFORMATION ANALYSIS\n\n");
    out.push_str(&format!("Case ID: {}\n", pack.case_id));
    out.push_str(&format!(
        "Generated At: {}\n\n",
        pack.generated_at.to_rfc3339()
    ));

    out.push_str("CONTENT SNAPSHOT\n");
    out.push_str(excerpt(&pack.content_snapshot));
    out.push_str("\n\n");

    out.push_str("CLAIMS ANALYZED\n");
    if pack.claims_analyzed.is_empty() {
        out.push_str("- None recorded\n");
    } else {
        for claim in &pack.claims_analyzed {
            out.push_str(&format!(
                "- {} ({})\n",
                claim.claim,
                serde_json::to_value(claim.status)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default()
            ));
        }
    }
    out.push('\n');

    out.push_str("FINAL VERDICT\n");
    out.push_str(&pack.final_verdict);
    out.push_str("\n\n");

    out.push_str("ANALYSIS REASON\n");
    out.push_str(excerpt(&pack.analysis_reason));
    out.push_str("\n\n");

    out.push_str("LEGAL NOTE\n");
    out.push_str(&pack.legal_note);
    out.push('\n');

    out
}

/// First [`RENDER_EXCERPT_CHARS`] characters, char-boundary safe.
fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(RENDER_EXCERPT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
