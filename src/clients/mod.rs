//! External API clients and the traits handlers depend on.
//!
//! Handlers never call the Groq or Telegram APIs directly; they go through
//! the [`CompletionApi`] and [`Notifier`] seams so deployments and tests can
//! substitute their own implementations.

pub mod llm_client;
pub mod telegram_client;

pub use llm_client::LlmClient;
pub use telegram_client::TelegramClient;

use async_trait::async_trait;

use crate::core::models::ChatTurn;
use crate::errors::GatewayError;

/// Chat-completion provider seam.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    /// Generates the assistant's next reply for the given turn sequence.
    async fn complete(&self, history: &[ChatTurn]) -> Result<String, GatewayError>;
}

/// Operator-notification seam.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a plain-text notification to the configured operator.
    async fn notify(&self, text: &str) -> Result<(), GatewayError>;

    /// Sends a MarkdownV2-formatted notification. Callers are responsible
    /// for escaping interpolated values.
    async fn notify_markdown(&self, text: &str) -> Result<(), GatewayError>;
}
