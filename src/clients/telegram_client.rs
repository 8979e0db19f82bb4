//! Telegram bot client used to alert the human operator.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;

use super::Notifier;
use crate::errors::GatewayError;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// Characters the Telegram MarkdownV2 dialect requires a backslash before.
const MARKDOWN_V2_RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes user-supplied text for interpolation into a MarkdownV2 message.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_V2_RESERVED.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Telegram `sendMessage` client bound to one recipient chat.
pub struct TelegramClient {
    bot_token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self { bot_token, chat_id }
    }

    async fn send_message(
        &self,
        text: &str,
        parse_mode: Option<&str>,
    ) -> Result<(), GatewayError> {
        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.bot_token
        );

        let mut body = json!({
            "chat_id": self.chat_id,
            "text": text,
        });
        if let Some(mode) = parse_mode {
            body["parse_mode"] = json!(mode);
        }

        let response = HTTP_CLIENT
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Http(format!("Telegram API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_json: Value = response.json().await.unwrap_or_default();
            let detail = error_json
                .get("description")
                .and_then(|d| d.as_str())
                .unwrap_or("Failed to send message to Telegram")
                .to_string();
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn notify(&self, text: &str) -> Result<(), GatewayError> {
        self.send_message(text, None).await
    }

    async fn notify_markdown(&self, text: &str) -> Result<(), GatewayError> {
        self.send_message(text, Some("MarkdownV2")).await
    }
}
