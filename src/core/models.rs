use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role tag on a conversation turn, serialized lowercase to match the
/// OpenAI-compatible wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message exchange unit in an assistant chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Closed,
}

/// One message in a live-chat transcript. Field names are camelCase on the
/// wire because the website front-end consumes them directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatMessage {
    pub id: String,
    pub sender: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// A live chat between a website visitor and a human operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveChatSession {
    pub session_id: String,
    pub user_name: String,
    pub email: String,
    pub started_at: DateTime<Utc>,
    pub status: SessionStatus,
    pub messages: Vec<LiveChatMessage>,
    pub last_activity: DateTime<Utc>,
}

impl LiveChatSession {
    pub fn new(user_name: Option<String>, email: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: new_session_id(),
            user_name: user_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "Anonymous".to_string()),
            email: email.unwrap_or_default(),
            started_at: now,
            status: SessionStatus::Active,
            messages: Vec::new(),
            last_activity: now,
        }
    }

    /// Appends a message and bumps the activity timestamp. Returns the
    /// generated message id.
    pub fn append_message(&mut self, sender: &str, message: &str) -> String {
        let id = new_message_id();
        let now = Utc::now();
        self.messages.push(LiveChatMessage {
            id: id.clone(),
            sender: sender.to_string(),
            message: message.to_string(),
            timestamp: now,
        });
        self.last_activity = now;
        id
    }
}

/// A contact-form submission. Transient: validated, forwarded, discarded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub message: String,
}

// UUIDs rather than time+random suffixes: ids must be unique across
// concurrently scaled instances, not just within one process.
pub fn new_session_id() -> String {
    format!("session_{}", Uuid::new_v4().simple())
}

pub fn new_message_id() -> String {
    format!("msg_{}", Uuid::new_v4().simple())
}
