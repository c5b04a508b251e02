// src/message.rs
use serde::{Deserialize, Serialize};

fn default_kind() -> String {
    "generate".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Open string: unknown values fall back to the base prompt.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    // Text-to-speech is not implemented; always null.
    pub audio_url: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_api: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub fn now_timestamp() -> String {
    chrono::Local::now().to_rfc3339()
}
