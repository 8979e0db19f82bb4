//! Handlers for live chat with a human operator (`/live-chat/*`).

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::gateway::Gateway;
use crate::core::models::LiveChatSession;
use crate::errors::GatewayError;

/// Sender value the website visitor uses; only these messages alert the
/// operator, replies from the operator do not echo back to Telegram.
const VISITOR_SENDER: &str = "user";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartRequest {
    user_name: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendRequest {
    session_id: String,
    message: String,
    sender: String,
}

fn admin_link(gateway: &Gateway, session_id: &str) -> String {
    format!("{}?session={}", gateway.config.admin_chat_url, session_id)
}

/// Start a session: persist the initial transcript and alert the operator.
pub async fn handle_start(gateway: &Gateway, body: &str) -> Result<Value, GatewayError> {
    let request: StartRequest = if body.trim().is_empty() {
        StartRequest::default()
    } else {
        serde_json::from_str(body)
            .map_err(|e| GatewayError::Validation(format!("Invalid request body: {}", e)))?
    };

    let session = LiveChatSession::new(request.user_name, request.email);
    let session_id = session.session_id.clone();

    let email_display = if session.email.is_empty() {
        "Not provided"
    } else {
        &session.email
    };
    let notification = format!(
        "\u{1F99B} New Live Chat Started\n\nUser: {}\nEmail: {}\nSession ID: {}\n\nClick here to chat: {}",
        session.user_name,
        email_display,
        session_id,
        admin_link(gateway, &session_id)
    );

    gateway.store.put_live(session).await?;
    gateway.notifier.notify(&notification).await?;

    info!(session_id = %session_id, "Live chat session started");

    Ok(json!({
        "sessionId": session_id,
        "message": "Live chat session started",
    }))
}

/// Append a message to an existing session. Unknown sessions are a 404 with
/// no side effects; visitor messages additionally alert the operator.
pub async fn handle_send(gateway: &Gateway, body: &str) -> Result<Value, GatewayError> {
    let request: SendRequest = serde_json::from_str(body).map_err(|_| {
        GatewayError::Validation("sessionId, message and sender are required".to_string())
    })?;

    let mut session = gateway
        .store
        .get_live(&request.session_id)
        .await?
        .ok_or_else(|| GatewayError::SessionNotFound(request.session_id.clone()))?;

    let message_id = session.append_message(&request.sender, &request.message);
    let user_name = session.user_name.clone();
    gateway.store.put_live(session).await?;

    if request.sender == VISITOR_SENDER {
        let notification = format!(
            "\u{1F4AC} New Message in Live Chat\n\nSession: {}\nUser: {}\nMessage: {}\n\nReply: {}",
            request.session_id,
            user_name,
            request.message,
            admin_link(gateway, &request.session_id)
        );
        gateway.notifier.notify(&notification).await?;
    }

    Ok(json!({ "success": true, "messageId": message_id }))
}

/// Return a session's transcript and the visitor's profile.
pub async fn handle_messages(
    gateway: &Gateway,
    session_id: Option<&str>,
) -> Result<Value, GatewayError> {
    let session_id = session_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| GatewayError::Validation("Session ID required".to_string()))?;

    let session = gateway
        .store
        .get_live(session_id)
        .await?
        .ok_or_else(|| GatewayError::SessionNotFound(session_id.to_string()))?;

    Ok(json!({
        "messages": session.messages,
        "userInfo": {
            "userName": session.user_name,
            "email": session.email,
            "startedAt": session.started_at,
        },
    }))
}

/// Return every active session, for the operator's admin panel.
pub async fn handle_sessions(gateway: &Gateway) -> Result<Value, GatewayError> {
    let sessions = gateway.store.list_active_live().await?;
    Ok(json!({ "sessions": sessions }))
}
