//! Handler for contact-form submissions (`/submit-contact`).
//!
//! Nothing is persisted: the submission is validated, formatted for
//! Telegram's MarkdownV2 dialect, forwarded, and discarded.

use serde_json::{Value, json};
use tracing::info;

use super::gateway::Gateway;
use crate::clients::telegram_client::escape_markdown;
use crate::core::models::ContactSubmission;
use crate::errors::GatewayError;

/// Formats the operator notification for a submission. All interpolated
/// fields are escaped; the surrounding template supplies the markup.
pub fn format_contact_message(submission: &ContactSubmission) -> String {
    let mut message = String::from("*New Contact Form Submission* \u{1F99B}\n\n");
    message.push_str(&format!(
        "*Name:* {} {}\n",
        escape_markdown(&submission.first_name),
        escape_markdown(&submission.last_name)
    ));
    message.push_str(&format!("*Email:* {}\n", escape_markdown(&submission.email)));

    if let Some(phone) = submission.phone_number.as_deref().filter(|p| !p.is_empty()) {
        let country_code = submission.country_code.as_deref().unwrap_or("");
        message.push_str(&format!(
            "*Phone:* {} {}\n",
            escape_markdown(country_code),
            escape_markdown(phone)
        ));
    }

    message.push_str(&format!(
        "*Message:*\n{}",
        escape_markdown(&submission.message)
    ));
    message
}

/// Handle a submission: validate, format, forward to the operator.
pub async fn handle_submit_contact(
    gateway: &Gateway,
    body: &str,
) -> Result<Value, GatewayError> {
    let submission: ContactSubmission = serde_json::from_str(body)
        .map_err(|e| GatewayError::Validation(format!("Invalid request body: {}", e)))?;

    if submission.first_name.trim().is_empty()
        || submission.email.trim().is_empty()
        || submission.message.trim().is_empty()
    {
        return Err(GatewayError::Validation(
            "Missing required fields (firstName, email, message).".to_string(),
        ));
    }

    let message = format_contact_message(&submission);
    gateway.notifier.notify_markdown(&message).await?;

    info!("Contact submission forwarded to operator");

    Ok(json!({ "message": "Submission successful" }))
}
