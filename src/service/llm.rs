//! Local LLM client
//!
//! Talks to an Ollama-compatible generate endpoint over plain JSON. The
//! pipeline degrades without it, so construction never fails.

use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_GENERATE_URL: &str = "http://localhost:11434/api/generate";
const ENV_OLLAMA_URL: &str = "OLLAMA_URL";

const DEFAULT_MODEL: &str = "llama3.1:latest";
const ENV_OLLAMA_MODEL: &str = "OLLAMA_MODEL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const PING_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("LLM backend returned error: {0}")]
    Backend(String),
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: Option<String>,
    error: Option<String>,
}

/// Client for a local Ollama generate endpoint
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    url: String,
    model: String,
}

impl LlmClient {
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            url: url.into(),
            model: model.into(),
        }
    }

    /// Build a client from `OLLAMA_URL` / `OLLAMA_MODEL`, falling back to the
    /// local defaults.
    pub fn from_env() -> Self {
        let url = env::var(ENV_OLLAMA_URL).unwrap_or_else(|_| DEFAULT_GENERATE_URL.to_string());
        let model = env::var(ENV_OLLAMA_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self::new(url, model)
    }

    /// Run one non-streaming completion and return the raw response text.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let payload = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        tracing::debug!(model = %self.model, url = %self.url, "Sending prompt to LLM");

        let response = self.client.post(&self.url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Backend(format!("{}: {}", status, body)));
        }

        let body: GenerateResponse = response.json().await?;

        if let Some(error) = body.error {
            return Err(LlmError::Backend(error));
        }

        Ok(body.response.unwrap_or_default())
    }

    /// Probe the backend for the readiness endpoint. Any HTTP response counts
    /// as reachable; the LLM is not a critical dependency.
    pub async fn ping(&self) -> bool {
        let base = match url::Url::parse(&self.url) {
            Ok(parsed) => match parsed.host_str() {
                Some(host) => format!(
                    "{}://{}{}",
                    parsed.scheme(),
                    host,
                    parsed.port().map(|p| format!(":{p}")).unwrap_or_default()
                ),
                None => return false,
            },
            Err(_) => return false,
        };

        self.client
            .get(&base)
            .timeout(PING_TIMEOUT)
            .send()
            .await
            .is_ok()
    }
}
