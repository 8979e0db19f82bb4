//! Common helper functions for API handlers.
//!
//! Response builders for the Lambda proxy format. Every response, success or
//! error, carries the permissive CORS headers the static front-end relies on.

use serde_json::{Value, json};

use crate::errors::GatewayError;

fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Headers": "Content-Type",
        "Access-Control-Allow-Methods": "POST, OPTIONS, GET",
        "Content-Type": "application/json",
    })
}

/// Returns a response with the given status code and JSON body.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": body.to_string(),
    })
}

/// Returns a 200 OK response with the given JSON body.
#[must_use]
pub fn ok_response(body: &Value) -> Value {
    json_response(200, body)
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str, details: Option<&str>) -> Value {
    let mut body = json!({ "error": message });
    if let Some(details) = details {
        body["details"] = json!(details);
    }
    json_response(status_code, &body)
}

/// Maps a handler error to the JSON error contract.
#[must_use]
pub fn error_response(error: &GatewayError) -> Value {
    match error {
        GatewayError::Validation(message) => err_response(400, message, None),
        GatewayError::SessionNotFound(_) => err_response(404, "Session not found", None),
        GatewayError::MethodNotAllowed => err_response(405, "Method not allowed", None),
        GatewayError::Upstream { status, detail } => {
            err_response(*status, "API error", Some(detail))
        }
        GatewayError::Http(_) | GatewayError::Store(_) | GatewayError::Config(_) => {
            err_response(500, "Server error", Some(&error.to_string()))
        }
    }
}

/// Returns the CORS preflight acknowledgement.
#[must_use]
pub fn preflight_response() -> Value {
    ok_response(&json!({ "message": "CORS preflight successful" }))
}
