//! Handlers for the website assistant (`/chat`, `/reset`).

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use super::gateway::Gateway;
use crate::core::models::{ChatTurn, new_session_id};
use crate::errors::GatewayError;
use crate::prompt;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest {
    message: String,
    session_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResetRequest {
    session_id: Option<String>,
}

/// Handle a chat message: load-or-init the session history, ask the
/// completion provider, persist the updated history under the retention
/// policy, and return the reply together with the session token.
///
/// Callers without a `sessionId` get a freshly minted token; unrelated
/// callers never share history.
pub async fn handle_chat(gateway: &Gateway, body: &str) -> Result<Value, GatewayError> {
    let request: ChatRequest = serde_json::from_str(body).map_err(|_| {
        GatewayError::Validation("message is required and must be a string".to_string())
    })?;
    if request.message.trim().is_empty() {
        return Err(GatewayError::Validation(
            "message is required and must be a string".to_string(),
        ));
    }

    let session_id = request.session_id.unwrap_or_else(new_session_id);

    let loaded = gateway.store.get_history(&session_id).await?;
    let mut history = prompt::ensure_history(loaded);
    history.push(ChatTurn::user(request.message));

    let reply = gateway.completions.complete(&history).await?;
    history.push(ChatTurn::assistant(reply.clone()));

    prompt::enforce_retention(&mut history, gateway.config.chat_history_keep);
    gateway.store.put_history(&session_id, history).await?;

    info!(session_id = %session_id, "Chat reply generated");

    Ok(json!({ "reply": reply, "sessionId": session_id }))
}

/// Handle a reset: with a `sessionId`, drop that session's history; without
/// one, drop every assistant history.
pub async fn handle_reset(gateway: &Gateway, body: &str) -> Result<Value, GatewayError> {
    let request: ResetRequest = if body.trim().is_empty() {
        ResetRequest::default()
    } else {
        serde_json::from_str(body).unwrap_or_default()
    };

    match request.session_id {
        Some(session_id) => {
            info!(session_id = %session_id, "Resetting chat session");
            gateway.store.delete_history(&session_id).await?;
        }
        None => {
            info!("Resetting all chat sessions");
            gateway.store.clear_histories().await?;
        }
    }

    Ok(json!({ "ok": true }))
}
