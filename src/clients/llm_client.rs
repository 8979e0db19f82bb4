//! Groq (OpenAI-compatible) chat-completion client.
//!
//! Encapsulates the single upstream call the assistant chat makes.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use super::CompletionApi;
use crate::core::models::ChatTurn;
use crate::errors::GatewayError;

const COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f64 = 0.15;

/// Returned when the provider answers 200 but the first choice has no text.
pub const FALLBACK_REPLY: &str = "Sorry, I could not generate a response.";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// Chat-completion client for the website assistant.
pub struct LlmClient {
    api_key: String,
    model_name: String,
}

impl LlmClient {
    pub fn new(api_key: String, model_name: Option<String>) -> Self {
        Self {
            api_key,
            model_name: model_name.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl CompletionApi for LlmClient {
    async fn complete(&self, history: &[ChatTurn]) -> Result<String, GatewayError> {
        info!(
            "Requesting completion from {} with {} turns",
            self.model_name,
            history.len()
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": history,
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        let response = HTTP_CLIENT
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GatewayError::Http(format!("Groq API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_json: Value = response.json().await.unwrap_or_default();
            let detail = error_json
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("Failed to fetch from API")
                .to_string();
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Http(format!("Failed to parse Groq response: {}", e)))?;

        let reply = response_json
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .unwrap_or(FALLBACK_REPLY)
            .to_string();

        Ok(reply)
    }
}
