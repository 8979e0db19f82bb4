//! Shared test doubles and Lambda payload builders.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use hippo_gateway::api::Gateway;
use hippo_gateway::clients::{CompletionApi, Notifier};
use hippo_gateway::core::config::AppConfig;
use hippo_gateway::core::models::ChatTurn;
use hippo_gateway::errors::GatewayError;
use hippo_gateway::store::MemoryStore;

pub const CANNED_REPLY: &str = "Hello from the assistant.";

/// Completion double that records every request and answers with a fixed
/// reply.
pub struct RecordingCompletion {
    pub requests: Mutex<Vec<Vec<ChatTurn>>>,
    pub reply: String,
}

impl RecordingCompletion {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: reply.to_string(),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Vec<ChatTurn> {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl CompletionApi for RecordingCompletion {
    async fn complete(&self, history: &[ChatTurn]) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(history.to_vec());
        Ok(self.reply.clone())
    }
}

/// Completion double that always fails like a rate-limited provider.
pub struct FailingCompletion;

#[async_trait]
impl CompletionApi for FailingCompletion {
    async fn complete(&self, _history: &[ChatTurn]) -> Result<String, GatewayError> {
        Err(GatewayError::Upstream {
            status: 429,
            detail: "rate limit exceeded".to_string(),
        })
    }
}

/// Notifier double that records what would have gone to Telegram.
#[derive(Default)]
pub struct RecordingNotifier {
    pub plain: Mutex<Vec<String>>,
    pub markdown: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn total_sent(&self) -> usize {
        self.plain.lock().unwrap().len() + self.markdown.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, text: &str) -> Result<(), GatewayError> {
        self.plain.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn notify_markdown(&self, text: &str) -> Result<(), GatewayError> {
        self.markdown.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        groq_api_key: "test-key".to_string(),
        groq_model: None,
        telegram_bot_token: "test-token".to_string(),
        telegram_chat_id: "12345".to_string(),
        admin_chat_url: "https://admin.example.com/live-chat".to_string(),
        chat_history_keep: 30,
        live_chat_ttl_secs: 3_600,
    }
}

/// A gateway wired to recording doubles and a fresh in-memory store.
pub fn test_gateway() -> (Gateway, Arc<RecordingCompletion>, Arc<RecordingNotifier>) {
    let completions = RecordingCompletion::new(CANNED_REPLY);
    let notifier = Arc::new(RecordingNotifier::default());
    let store = Arc::new(MemoryStore::new(Duration::from_secs(3_600)));
    let gateway = Gateway::with_collaborators(
        test_config(),
        completions.clone(),
        notifier.clone(),
        store,
    );
    (gateway, completions, notifier)
}

// Lambda proxy payload builders (API Gateway v2 shape).

pub fn post(path: &str, body: &Value) -> Value {
    json!({
        "rawPath": path,
        "requestContext": { "http": { "method": "POST" } },
        "body": body.to_string(),
    })
}

pub fn get(path: &str, params: &Value) -> Value {
    json!({
        "rawPath": path,
        "requestContext": { "http": { "method": "GET" } },
        "queryStringParameters": params,
    })
}

pub fn options(path: &str) -> Value {
    json!({
        "rawPath": path,
        "requestContext": { "http": { "method": "OPTIONS" } },
    })
}

pub fn response_status(response: &Value) -> u64 {
    response["statusCode"].as_u64().unwrap()
}

pub fn response_body(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}
