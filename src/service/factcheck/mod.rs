//! Claim-level fact-check pipeline
//!
//! Orchestrates article retrieval, claim extraction, evidence verification,
//! and reason generation. Every step is failure-tolerant: external-service
//! errors degrade the result instead of aborting the check, and nothing is
//! retried.

mod claims;
mod verification;

pub use claims::{HIGH_RISK_KEYWORDS, contains_high_risk_keyword, extract_claims};
pub use verification::verify_claims;

use url::Url;

use crate::model::{FactCheckReport, FactVerdict, VerificationStatus};
use crate::retriever::ArticleRetriever;
use crate::service::llm::LlmClient;
use crate::service::search::SearchClient;

/// Reason used when no identifiable claims come out of the text
const NO_CLAIMS_REASON: &str = "The information could not be verified because it lacks \
     identifiable claims or credible supporting evidence.";

/// Reason used for unsourced death/illness claims
const HIGH_RISK_REASON: &str = "This claim involves a reported death or serious illness, but no \
     confirmation was found from credible or official sources. Such claims are commonly \
     associated with misinformation.";

/// Reason used when reason generation itself is unavailable
const NO_SIGNALS_REASON: &str =
    "No sufficient verification signals were available to reach a definitive conclusion.";

/// Fact-check pipeline over LLM, search, and article retrieval
pub struct FactCheckService {
    llm: LlmClient,
    search: SearchClient,
    retriever: ArticleRetriever,
}

impl FactCheckService {
    pub fn new(llm: LlmClient, search: SearchClient, retriever: ArticleRetriever) -> Self {
        Self {
            llm,
            search,
            retriever,
        }
    }

    /// Run the full pipeline over inline text and/or a URL.
    ///
    /// Decision order:
    /// 1. a URL takes precedence over inline text as the content source;
    /// 2. no claims extracted => `Unverified` with a fixed reason;
    /// 3. a high-risk claim without a URL => `Fake` with a fixed reason;
    /// 4. any claim without evidence => `Fake`, otherwise `Unverified`.
    pub async fn fact_check(&self, text: Option<&str>, url: Option<&str>) -> FactCheckReport {
        let content = self.resolve_content(text, url).await;

        let claims = extract_claims(&self.llm, &content).await;

        if claims.is_empty() {
            return FactCheckReport {
                verdict: FactVerdict::Unverified,
                claims: Vec::new(),
                reason: NO_CLAIMS_REASON.to_string(),
            };
        }

        let high_risk = claims.iter().any(|c| c.kind.is_high_risk());

        let verification = verify_claims(&self.search, &self.retriever, claims).await;

        // Unsourced death/illness rumors are condemned without an evidence pass
        if high_risk && url.is_none() {
            return FactCheckReport {
                verdict: FactVerdict::Fake,
                claims: verification,
                reason: HIGH_RISK_REASON.to_string(),
            };
        }

        let any_unsupported = verification
            .iter()
            .any(|v| v.status == VerificationStatus::NoEvidenceFound);

        let verdict = if any_unsupported {
            FactVerdict::Fake
        } else {
            FactVerdict::Unverified
        };

        let reason = if verification.is_empty() {
            NO_SIGNALS_REASON.to_string()
        } else {
            self.generate_reason(verdict, &verification).await
        };

        tracing::info!(
            verdict = %verdict,
            claim_count = verification.len(),
            "Fact-check completed"
        );

        FactCheckReport {
            verdict,
            claims: verification,
            reason,
        }
    }

    /// Resolve the text under analysis: a valid http(s) URL wins, and a
    /// failed retrieval degrades to empty content rather than an error.
    async fn resolve_content(&self, text: Option<&str>, url: Option<&str>) -> String {
        if let Some(parsed) = url.and_then(|u| parse_http_url(u)) {
            return match self.retriever.retrieve(&parsed).await {
                Ok(article) => article.text,
                Err(e) => {
                    tracing::warn!(error = %e, url = %parsed, "Failed to retrieve article");
                    String::new()
                }
            };
        }

        text.unwrap_or("").to_string()
    }

    /// Explain the verdict from the verification signals.
    async fn generate_reason(
        &self,
        verdict: FactVerdict,
        signals: &[crate::model::ClaimVerification],
    ) -> String {
        let signals_json =
            serde_json::to_string_pretty(signals).unwrap_or_else(|_| "[]".to_string());

        let prompt = format!(
            r#"You are explaining why a news item was marked as {verdict}.
Base explanation ONLY on the signals below.
Be neutral and factual.

Signals:
{signals_json}"#
        );

        match self.llm.generate(&prompt).await {
            Ok(reason) if !reason.trim().is_empty() => reason.trim().to_string(),
            Ok(_) => NO_SIGNALS_REASON.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Reason generation failed, using fallback");
                NO_SIGNALS_REASON.to_string()
            }
        }
    }
}

/// Parse a string as an absolute http(s) URL.
fn parse_http_url(raw: &str) -> Option<Url> {
    let parsed = Url::parse(raw).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some(parsed)
}
