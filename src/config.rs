// src/config.rs
//! Deployment configuration, read once from the process environment.

use std::fmt::Debug;

use thiserror::Error;

use crate::services::chatbot::ChatRelay;
use crate::services::gemini::{self, GeminiProvider};
use crate::services::ollama::{self, OllamaProvider};
use crate::services::persona::Persona;
use crate::services::provider::LlmProvider;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_SPEAKER: &str = "Assistant";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    Ollama {
        url: String,
        model: String,
    },
    Gemini {
        url: String,
        model: String,
        api_key: String,
    },
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderConfig::Ollama { url, model } => f
                .debug_struct("Ollama")
                .field("url", url)
                .field("model", model)
                .finish(),
            ProviderConfig::Gemini { url, model, .. } => f
                .debug_struct("Gemini")
                .field("url", url)
                .field("model", model)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub provider: ProviderConfig,
    pub persona: Persona,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let provider = match get("LLM_PROVIDER").as_deref().map(str::trim) {
            None | Some("ollama") => ProviderConfig::Ollama {
                url: get("OLLAMA_URL").unwrap_or_else(|| ollama::DEFAULT_URL.to_string()),
                model: get("OLLAMA_MODEL")
                    .unwrap_or_else(|| ollama::DEFAULT_MODEL.to_string()),
            },
            Some("gemini") => ProviderConfig::Gemini {
                url: get("GEMINI_URL").unwrap_or_else(|| gemini::DEFAULT_URL.to_string()),
                model: get("GEMINI_MODEL")
                    .unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string()),
                api_key: get("GEMINI_API_KEY")
                    .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?,
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "LLM_PROVIDER",
                    value: other.to_string(),
                });
            }
        };

        let persona = match get("PERSONA").as_deref().map(str::trim) {
            None | Some("buddy") => Persona::Buddy,
            Some("expert") => Persona::Expert,
            Some("doctor") => Persona::Doctor,
            Some("custom") => Persona::Custom {
                template: get("PERSONA_TEMPLATE")
                    .ok_or(ConfigError::Missing("PERSONA_TEMPLATE"))?,
                speaker: get("PERSONA_SPEAKER")
                    .unwrap_or_else(|| DEFAULT_SPEAKER.to_string()),
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "PERSONA",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            host,
            port,
            provider,
            persona,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn build_relay(&self) -> ChatRelay {
        let client = reqwest::Client::new();
        let provider = match &self.provider {
            ProviderConfig::Ollama { url, model } => {
                LlmProvider::Ollama(OllamaProvider::new(client, url.clone(), model.clone()))
            }
            ProviderConfig::Gemini {
                url,
                model,
                api_key,
            } => LlmProvider::Gemini(GeminiProvider::new(
                client,
                url.clone(),
                model.clone(),
                api_key.clone(),
            )),
        };
        ChatRelay::new(provider, self.persona.clone())
    }
}
