use std::env;

/// Default number of non-system turns retained per chat session.
pub const DEFAULT_HISTORY_KEEP: usize = 30;

/// Default idle lifetime for live-chat sessions (24 hours).
pub const DEFAULT_LIVE_CHAT_TTL_SECS: u64 = 86_400;

const DEFAULT_ADMIN_CHAT_URL: &str = "https://admin.hippoclouds.com/live-chat";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub groq_api_key: String,
    pub groq_model: Option<String>,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub admin_chat_url: String,
    /// Retention policy for chat histories: the system turn plus this many of
    /// the most recent turns survive truncation.
    pub chat_history_keep: usize,
    /// Live-chat sessions idle longer than this are evicted from the store.
    pub live_chat_ttl_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            groq_api_key: env::var("GROQ_API_KEY").map_err(|e| format!("GROQ_API_KEY: {}", e))?,
            groq_model: env::var("GROQ_MODEL").ok(),
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .map_err(|e| format!("TELEGRAM_BOT_TOKEN: {}", e))?,
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID")
                .map_err(|e| format!("TELEGRAM_CHAT_ID: {}", e))?,
            admin_chat_url: env::var("ADMIN_CHAT_URL")
                .unwrap_or_else(|_| DEFAULT_ADMIN_CHAT_URL.to_string()),
            chat_history_keep: parse_env("CHAT_HISTORY_KEEP", DEFAULT_HISTORY_KEEP)?,
            live_chat_ttl_secs: parse_env("LIVE_CHAT_TTL_SECS", DEFAULT_LIVE_CHAT_TTL_SECS)?,
        })
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| format!("{}: invalid value {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}
