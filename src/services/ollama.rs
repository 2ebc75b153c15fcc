// src/services/ollama.rs
use serde::{Deserialize, Serialize};

use super::provider::{ProviderError, error_chain, read_json};

pub const DEFAULT_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "gemma3:12b";

pub const NOT_RUNNING: &str =
    "Ollama is not running. Please run 'ollama serve' and pull the model.";

#[derive(Debug, Clone)]
pub struct OllamaProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaProvider {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        tracing::debug!(url = %url, model = %self.model, "calling ollama");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::Unavailable(NOT_RUNNING.to_string())
                } else {
                    ProviderError::Upstream(error_chain(&e))
                }
            })?;

        let parsed: GenerateResponse = read_json(response).await?;
        Ok(parsed.response)
    }
}
