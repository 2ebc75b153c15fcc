// src/message.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: String,
    /// Plant status sent by the client, e.g. `{"waterLevel": 30, "affection": 50}`.
    /// Values are kept loosely typed; unknown or non-numeric entries are ignored.
    #[serde(default)]
    pub context: Option<HashMap<String, Value>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
