//! Google Gemini client and the `LanguageModel` capability the handlers depend on.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ModelError {
    /// The call succeeded but produced no usable text.
    #[error("empty response from model")]
    Empty,

    /// Raw upstream failure text, classified later for the user.
    #[error("{0}")]
    Upstream(String),
}

/// A text generation backend. One instance is built at startup and shared.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;

    fn model_name(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
    status: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        let parts = self.candidates.into_iter().next()?.content?.parts;
        let text: String = parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

/// Accepts "gemini-x" or "models/gemini-x" and returns the bare name.
pub fn normalize_model_name(name: &str) -> String {
    name.trim().trim_start_matches("models/").to_string()
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Builds the HTTP client once; requests are single-shot and never retried.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: normalize_model_name(&config.model_name),
            timeout: config.timeout,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn transport_error(&self, err: reqwest::Error) -> ModelError {
        let raw = if err.is_timeout() {
            format!("connection timed out after {}s", self.timeout.as_secs())
        } else if err.is_connect() {
            format!("connection error: {err}")
        } else if err.is_decode() {
            format!("API returned an invalid body: {err}")
        } else {
            format!("network error: {err}")
        };
        ModelError::Upstream(raw)
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_chars = prompt.chars().count(), "calling Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(env) => match env.error.status {
                    Some(code) => format!("{} ({})", env.error.message, code),
                    None => env.error.message,
                },
                Err(_) => text,
            };
            tracing::warn!(%status, "Gemini returned an error status");
            return Err(ModelError::Upstream(format!(
                "API error (HTTP {}): {}",
                status.as_u16(),
                detail
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| self.transport_error(e))?;

        parsed.into_text().ok_or(ModelError::Empty)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(model: &str) -> Config {
        Config {
            api_key: "test_key".to_string(),
            model_name: model.to_string(),
            base_url: "https://test.api.com/v1beta/".to_string(),
            timeout: Duration::from_secs(3),
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }

    #[test]
    fn model_prefix_is_optional() {
        assert_eq!(normalize_model_name("models/gemini-1.5-flash"), "gemini-1.5-flash");
        assert_eq!(normalize_model_name("gemini-1.5-flash"), "gemini-1.5-flash");
    }

    #[test]
    fn endpoint_uses_bare_model_name() {
        let client = GeminiClient::new(&config("models/gemini-2.0-flash")).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://test.api.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert_eq!(client.model_name(), "gemini-2.0-flash");
    }

    #[test]
    fn text_parts_are_concatenated() {
        let parsed: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"ஒரு "},{"text":"காலத்தில்"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("ஒரு காலத்தில்"));
    }

    #[test]
    fn blocked_or_blank_output_is_none() {
        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(blocked.into_text().is_none());

        let blank: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  \n"}]}}]}"#)
                .unwrap();
        assert!(blank.into_text().is_none());
    }

    #[test]
    fn empty_error_text_avoids_the_api_keyword() {
        let text = ModelError::Empty.to_string();
        assert!(text.contains("empty response"));
        assert!(!text.to_lowercase().contains("api"));
    }
}
