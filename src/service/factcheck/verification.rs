//! Evidence search for extracted claims

use futures::future::join_all;

use crate::model::{Claim, ClaimVerification, VerificationStatus};
use crate::retriever::ArticleRetriever;
use crate::service::search::{DEFAULT_MAX_RESULTS, SearchClient};

/// Verify each claim against the open web. Claims verify concurrently; each
/// verification is independent and failure-tolerant.
pub async fn verify_claims(
    search: &SearchClient,
    retriever: &ArticleRetriever,
    claims: Vec<Claim>,
) -> Vec<ClaimVerification> {
    let futures: Vec<_> = claims
        .into_iter()
        .map(|claim| verify_single(search, retriever, claim))
        .collect();

    join_all(futures).await
}

/// Search the claim text, scrape each hit, and mark the claim verified on the
/// first page whose text contains it case-insensitively.
async fn verify_single(
    search: &SearchClient,
    retriever: &ArticleRetriever,
    claim: Claim,
) -> ClaimVerification {
    let urls = match search.search(&claim.claim, DEFAULT_MAX_RESULTS).await {
        Ok(urls) => urls,
        Err(e) => {
            tracing::debug!(error = %e, claim = %claim.claim, "Evidence search failed");
            Vec::new()
        }
    };

    let needle = claim.claim.to_lowercase();
    let mut status = VerificationStatus::NoEvidenceFound;

    for url in urls {
        match retriever.retrieve(&url).await {
            Ok(article) => {
                if article.text.to_lowercase().contains(&needle) {
                    tracing::debug!(url = %url, "Evidence found for claim");
                    status = VerificationStatus::Verified;
                    break;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, url = %url, "Failed to retrieve evidence page");
            }
        }
    }

    ClaimVerification {
        claim: claim.claim,
        kind: claim.kind,
        status,
    }
}
