//! Web evidence search
//!
//! Queries the DuckDuckGo HTML endpoint (no API key required) and extracts
//! result links. Used by claim verification to find candidate evidence pages.

use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

const SEARCH_URL: &str = "https://duckduckgo.com/html/";
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of result links returned per query
pub const DEFAULT_MAX_RESULTS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Search endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the DuckDuckGo HTML search endpoint
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    pub fn new() -> Self {
        Self::with_base_url(SEARCH_URL)
    }

    /// Point the client at a different search endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent("Mozilla/5.0")
                .timeout(SEARCH_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }

    /// Search for `query` and return up to `max_results` absolute result links.
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Url>, SearchError> {
        tracing::debug!(query = %query, "Searching for evidence");

        let response = self
            .client
            .post(&self.base_url)
            .form(&[("q", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(Self::extract_result_links(&body, max_results))
    }

    /// Pull result anchors out of the search result markup.
    fn extract_result_links(html: &str, max_results: usize) -> Vec<Url> {
        let document = Html::parse_document(html);

        let selector = match Selector::parse("a.result__a") {
            Ok(selector) => selector,
            Err(_) => return Vec::new(),
        };

        document
            .select(&selector)
            .filter_map(|anchor| anchor.value().attr("href"))
            .filter(|href| href.starts_with("http"))
            .filter_map(|href| Url::parse(href).ok())
            .take(max_results)
            .collect()
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULT_PAGE: &str = r#"
        <html><body>
          <a class="result__a" href="https://news.example/story-1">Story one</a>
          <a class="result__a" href="/relative/skip-me">Relative</a>
          <a class="other" href="https://news.example/not-a-result">Other</a>
          <a class="result__a" href="https://archive.example/story-2">Story two</a>
        </body></html>
    "#;

    #[test]
    fn test_extracts_absolute_result_links_only() {
        let links = SearchClient::extract_result_links(RESULT_PAGE, 10);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].as_str(), "https://news.example/story-1");
        assert_eq!(links[1].as_str(), "https://archive.example/story-2");
    }

    #[test]
    fn test_result_limit_is_honored() {
        let links = SearchClient::extract_result_links(RESULT_PAGE, 1);
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_empty_page_yields_no_links() {
        assert!(SearchClient::extract_result_links("<html></html>", 5).is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_live_search_returns_links() {
        let client = SearchClient::new();
        let links = client.search("reuters", DEFAULT_MAX_RESULTS).await.unwrap();
        assert!(!links.is_empty());
    }
}
