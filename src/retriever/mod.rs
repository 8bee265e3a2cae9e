//! Article retrieval for fact-check evidence
//!
//! Turns a URL into title + readable text. The fact-check pipeline treats a
//! failed retrieval as an empty article, so errors here never abort a check.

mod article;

use url::Url;

pub use article::ArticleRetriever;

#[derive(Debug, thiserror::Error)]
pub enum RetrieverError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL blocked by configuration: {0}")]
    Blocked(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Readable content extracted from one page
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub text: String,
    pub source: Url,
}

/// Convert HTML to Markdown for text matching
fn html_to_markdown(html: &str) -> String {
    htmd::convert(html).unwrap_or_else(|_| html.to_string())
}
