//! Generic article retriever with title extraction

use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use super::{Article, RetrieverError, html_to_markdown};
use crate::model::RetrieverConfig;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Retriever for arbitrary web articles
#[derive(Clone)]
pub struct ArticleRetriever {
    client: Client,
    config: RetrieverConfig,
}

impl ArticleRetriever {
    pub fn new(config: RetrieverConfig) -> Self {
        if !config.allow.is_empty() {
            tracing::info!(allow = ?config.allow, "Retriever whitelist configured");
        }
        if !config.deny.is_empty() {
            tracing::info!(deny = ?config.deny, "Retriever blacklist configured");
        }

        Self {
            client: Client::builder()
                .user_agent("mdrs-triage/1.0")
                .timeout(FETCH_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            config,
        }
    }

    /// Fetch a page and reduce it to title + readable text.
    pub async fn retrieve(&self, url: &Url) -> Result<Article, RetrieverError> {
        if !self.config.is_url_allowed(url) {
            tracing::debug!(url = %url, "URL blocked by configuration");
            return Err(RetrieverError::Blocked(url.to_string()));
        }

        tracing::debug!(url = %url, "Fetching article");

        let response = self.client.get(url.as_str()).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RetrieverError::NotFound(url.to_string()));
        }

        if !response.status().is_success() {
            return Err(RetrieverError::ParseError(format!(
                "HTTP {}: {}",
                response.status(),
                url
            )));
        }

        let html = response.text().await?;

        let title = Self::extract_title(&html).unwrap_or_default();
        let text = html_to_markdown(&html);

        Ok(Article {
            title,
            text,
            source: url.clone(),
        })
    }

    /// Extract title from `<title>` or `<meta property="og:title">`
    fn extract_title(html: &str) -> Option<String> {
        let document = Html::parse_document(html);

        if let Ok(selector) = Selector::parse("title") {
            if let Some(el) = document.select(&selector).next() {
                let title = el.text().collect::<String>().trim().to_string();
                if !title.is_empty() {
                    return Some(title);
                }
            }
        }

        if let Ok(selector) = Selector::parse("meta[property=\"og:title\"]") {
            if let Some(el) = document.select(&selector).next() {
                return el.value().attr("content").map(|s| s.trim().to_string());
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_title_tag() {
        let html = "<html><head><title> Breaking story </title></head><body></body></html>";
        assert_eq!(
            ArticleRetriever::extract_title(html),
            Some("Breaking story".to_string())
        );
    }

    #[test]
    fn test_title_falls_back_to_og_title() {
        let html = r#"<html><head><meta property="og:title" content="Og headline"></head></html>"#;
        assert_eq!(
            ArticleRetriever::extract_title(html),
            Some("Og headline".to_string())
        );
    }

    #[test]
    fn test_missing_title_yields_none() {
        assert_eq!(ArticleRetriever::extract_title("<html></html>"), None);
    }

    #[tokio::test]
    async fn test_blocked_host_is_rejected_without_fetching() {
        let retriever = ArticleRetriever::new(RetrieverConfig {
            allow: vec![],
            deny: vec!["blocked.example".to_string()],
        });
        let url = Url::parse("https://blocked.example/story").unwrap();
        let result = retriever.retrieve(&url).await;
        assert!(matches!(result, Err(RetrieverError::Blocked(_))));
    }
}
