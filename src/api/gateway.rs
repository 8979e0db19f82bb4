use std::sync::Arc;
use std::time::Duration;

use crate::clients::{CompletionApi, LlmClient, Notifier, TelegramClient};
use crate::core::config::AppConfig;
use crate::store::{MemoryStore, SessionStore};

/// The injected collaborators every handler works against.
///
/// One `Gateway` is built at process start and shared across invocations, so
/// the in-process session store survives warm reuse of the same instance.
pub struct Gateway {
    pub config: AppConfig,
    pub completions: Arc<dyn CompletionApi>,
    pub notifier: Arc<dyn Notifier>,
    pub store: Arc<dyn SessionStore>,
}

impl Gateway {
    /// Wires the production collaborators from configuration.
    pub fn new(config: AppConfig) -> Self {
        let completions: Arc<dyn CompletionApi> = Arc::new(LlmClient::new(
            config.groq_api_key.clone(),
            config.groq_model.clone(),
        ));
        let notifier: Arc<dyn Notifier> = Arc::new(TelegramClient::new(
            config.telegram_bot_token.clone(),
            config.telegram_chat_id.clone(),
        ));
        let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new(Duration::from_secs(
            config.live_chat_ttl_secs,
        )));

        Self {
            config,
            completions,
            notifier,
            store,
        }
    }

    /// Builds a gateway around explicit collaborators.
    pub fn with_collaborators(
        config: AppConfig,
        completions: Arc<dyn CompletionApi>,
        notifier: Arc<dyn Notifier>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            config,
            completions,
            notifier,
            store,
        }
    }
}
