//! Gateway Lambda handler - thin router that delegates to specialized handlers.
//!
//! This module handles:
//! - CORS preflight acknowledgement
//! - Path/method routing to the chat, live-chat and contact handlers
//! - Mapping handler errors to the JSON error contract

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::error;

use super::gateway::Gateway;
use super::{chat_handler, contact_handler, helpers, live_chat_handler, parsing};
use crate::errors::GatewayError;

/// Lambda handler for the gateway entry point.
///
/// Every request, including failures, resolves to a Lambda proxy response
/// with CORS headers; only infrastructure-level problems surface as `Err`.
#[tracing::instrument(level = "info", skip(event, gateway))]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    gateway: &Gateway,
) -> Result<Value, Error> {
    Ok(route_request(&event.payload, gateway).await)
}

/// Deployment-agnostic router core.
pub async fn route_request(payload: &Value, gateway: &Gateway) -> Value {
    let method = parsing::request_method(payload);

    // Preflight first: OPTIONS succeeds on every path with no side effects.
    if method == "OPTIONS" {
        return helpers::preflight_response();
    }

    let path = parsing::request_path(payload);
    let body = parsing::request_body(payload);

    let result = match path {
        p if p.ends_with("/live-chat/start") => match method.as_str() {
            "POST" => live_chat_handler::handle_start(gateway, body).await,
            _ => Err(GatewayError::MethodNotAllowed),
        },
        p if p.ends_with("/live-chat/send") => match method.as_str() {
            "POST" => live_chat_handler::handle_send(gateway, body).await,
            _ => Err(GatewayError::MethodNotAllowed),
        },
        p if p.ends_with("/live-chat/messages") => match method.as_str() {
            "GET" => {
                live_chat_handler::handle_messages(
                    gateway,
                    parsing::query_param(payload, "sessionId"),
                )
                .await
            }
            _ => Err(GatewayError::MethodNotAllowed),
        },
        p if p.ends_with("/live-chat/sessions") => match method.as_str() {
            "GET" => live_chat_handler::handle_sessions(gateway).await,
            _ => Err(GatewayError::MethodNotAllowed),
        },
        p if p.ends_with("/submit-contact") => match method.as_str() {
            "POST" => contact_handler::handle_submit_contact(gateway, body).await,
            _ => Err(GatewayError::MethodNotAllowed),
        },
        p if p.ends_with("/reset") => match method.as_str() {
            "POST" => chat_handler::handle_reset(gateway, body).await,
            _ => Err(GatewayError::MethodNotAllowed),
        },
        p if p.ends_with("/chat") => match method.as_str() {
            "POST" => chat_handler::handle_chat(gateway, body).await,
            _ => Err(GatewayError::MethodNotAllowed),
        },
        _ => return helpers::err_response(404, "Not Found", None),
    };

    match result {
        Ok(response_body) => helpers::ok_response(&response_body),
        Err(e) => {
            error!(path = %path, method = %method, "Request failed: {}", e);
            helpers::error_response(&e)
        }
    }
}
