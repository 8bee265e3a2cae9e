use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::analysis::Verdict;

/// Verdict attached to every feed item before any analysis has run
pub const DEFAULT_FEED_VERDICT: Verdict = Verdict::Unverified;

/// One already-parsed feed entry.
///
/// Fetching and parsing the feed itself belongs to the viewer; this model
/// only covers the annotation step.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub published: Option<String>,
}

/// A feed entry carrying the default verdict and its confidence
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnnotatedFeedItem {
    pub title: String,
    pub link: String,
    pub published: Option<String>,
    pub verdict: Verdict,
    pub confidence: String,
}

/// Attach the constant default verdict to each parsed feed item.
pub fn annotate(items: Vec<FeedItem>) -> Vec<AnnotatedFeedItem> {
    items
        .into_iter()
        .map(|item| AnnotatedFeedItem {
            title: item.title,
            link: item.link,
            published: item.published,
            verdict: DEFAULT_FEED_VERDICT,
            confidence: DEFAULT_FEED_VERDICT.confidence().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_item_gets_the_default_verdict() {
        let items = vec![
            FeedItem {
                title: "Breaking update".to_string(),
                link: "https://feeds.example/1".to_string(),
                published: Some("Fri, 30 Jan 2026 09:00:00 GMT".to_string()),
            },
            FeedItem {
                title: "Quiet day".to_string(),
                link: "https://feeds.example/2".to_string(),
                published: None,
            },
        ];

        let annotated = annotate(items);
        assert_eq!(annotated.len(), 2);
        for item in annotated {
            assert_eq!(item.verdict, Verdict::Unverified);
            assert_eq!(item.confidence, "0.55");
        }
    }
}
