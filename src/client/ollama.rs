//! Ollama REST client
//!
//! `GET {base}/tags` lists models; `POST {base}/generate` returns a stream of
//! newline-delimited JSON fragments which are reassembled into one string.

use crate::client::{filter_models, reassemble_stream, CompletionClient};
use crate::{CahError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API base for a local Ollama server
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/api";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Deserialize)]
struct ModelTag {
    #[serde(default)]
    name: Option<String>,
}

/// HTTP client for an Ollama-compatible completion endpoint
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a client for `base_url` (e.g. `http://localhost:11434/api`)
    ///
    /// No request timeout is applied unless one is given.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| CahError::EndpointUnreachable(format!("failed to build HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(OllamaClient { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Read a successful response body as text
    async fn body_text(resp: reqwest::Response, endpoint: &str) -> Result<String> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CahError::EndpointUnreachable(format!(
                "{endpoint} returned {status}: {body}"
            )));
        }
        resp.text()
            .await
            .map_err(|e| CahError::EndpointUnreachable(format!("{endpoint} body read failed: {e}")))
    }
}

impl CompletionClient for OllamaClient {
    async fn list_models(&self) -> Result<Vec<String>> {
        let resp = self
            .http
            .get(self.url("/tags"))
            .send()
            .await
            .map_err(|e| CahError::EndpointUnreachable(format!("/tags request failed: {e}")))?;
        let body = Self::body_text(resp, "/tags").await?;

        let tags: TagsResponse = serde_json::from_str(&body).map_err(|e| {
            CahError::EndpointUnreachable(format!("invalid /tags response: {e}"))
        })?;

        let models = filter_models(tags.models.into_iter().filter_map(|tag| tag.name));
        if models.is_empty() {
            return Err(CahError::NoModelsAvailable);
        }
        tracing::debug!(count = models.len(), "listed models");
        Ok(models)
    }

    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        tracing::debug!(model, prompt, "sending completion request");
        let resp = self
            .http
            .post(self.url("/generate"))
            .json(&GenerateRequest { model, prompt })
            .send()
            .await
            .map_err(|e| CahError::EndpointUnreachable(format!("/generate request failed: {e}")))?;
        let body = Self::body_text(resp, "/generate").await?;
        Ok(reassemble_stream(&body))
    }
}
