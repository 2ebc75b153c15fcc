// src/services/chatbot.rs
use std::collections::HashMap;

use serde_json::Value;

use super::persona::{Persona, PlantStatus};
use super::provider::{LlmProvider, ProviderError};

/// One configured persona in front of one upstream model.
#[derive(Debug, Clone)]
pub struct ChatRelay {
    provider: LlmProvider,
    persona: Persona,
}

impl ChatRelay {
    pub fn new(provider: LlmProvider, persona: Persona) -> Self {
        Self { provider, persona }
    }

    pub fn provider(&self) -> &LlmProvider {
        &self.provider
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Renders the persona prompt for `message` and returns the model's reply verbatim.
    pub async fn relay(
        &self,
        message: &str,
        context: &HashMap<String, Value>,
    ) -> Result<String, ProviderError> {
        let status = PlantStatus::from_context(context);
        let prompt = self.persona.build_prompt(message, &status);

        tracing::debug!(
            persona = self.persona.name(),
            water_level = status.water_level,
            affection = status.affection,
            mood = %status.mood(),
            "relaying chat message"
        );

        self.provider.complete(&prompt).await.inspect_err(|e| {
            tracing::error!(provider = self.provider.name(), error = %e, "upstream call failed");
        })
    }
}
