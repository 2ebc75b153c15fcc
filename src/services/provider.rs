// src/services/provider.rs
//! Upstream text-generation backends.
//!
//! `LlmProvider` is an enum over the concrete clients; each one turns a
//! finished prompt into the model's plain-text reply.

use std::error::Error as StdError;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::gemini::GeminiProvider;
use super::ollama::OllamaProvider;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The upstream could not be reached at all.
    #[error("{0}")]
    Unavailable(String),
    /// Anything else: error status, broken connection, unusable body.
    #[error("{0}")]
    Upstream(String),
}

#[derive(Debug, Clone)]
pub enum LlmProvider {
    Ollama(OllamaProvider),
    Gemini(GeminiProvider),
}

impl LlmProvider {
    pub async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        match self {
            LlmProvider::Ollama(p) => p.complete(prompt).await,
            LlmProvider::Gemini(p) => p.complete(prompt).await,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LlmProvider::Ollama(_) => "ollama",
            LlmProvider::Gemini(_) => "gemini",
        }
    }

    pub fn model(&self) -> &str {
        match self {
            LlmProvider::Ollama(p) => p.model(),
            LlmProvider::Gemini(p) => p.model(),
        }
    }
}

/// Renders `err` followed by every `source()` below it, joined with `": "`.
///
/// `reqwest::Error`'s own message stops at "error sending request"; the cause
/// (refused connection, TLS failure, reset) only shows up in the chain.
pub(crate) fn error_chain(err: &dyn StdError) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.ends_with(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

/// Reads the body of an upstream response and decodes it as `T`.
///
/// Non-2xx statuses and undecodable bodies both become `Upstream` errors
/// carrying the status line or the decoder message.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ProviderError::Upstream(error_chain(&e)))?;

    if !status.is_success() {
        return Err(ProviderError::Upstream(format!("{status}: {}", text.trim())));
    }

    serde_json::from_str(&text)
        .map_err(|e| ProviderError::Upstream(format!("malformed response: {e}")))
}
