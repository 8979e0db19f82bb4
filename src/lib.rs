/// Hippo Gateway - serverless HTTP gateway for the HippoClouds marketing site.
///
/// This crate implements a single-Lambda gateway that fronts three kinds of
/// website traffic:
/// 1. Assistant chat (`/chat`, `/reset`) proxied to the Groq chat-completion API
///    with per-session conversation history
/// 2. Live chat with a human operator (`/live-chat/*`) with transcript storage
///    and Telegram notifications
/// 3. Contact-form submissions (`/submit-contact`) forwarded to Telegram
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution (one multiplexed entry point)
/// - reqwest for the Groq and Telegram API calls
/// - A `SessionStore` abstraction for conversation and transcript state
/// - Tokio for async runtime
///
/// The handler core is deployment-agnostic: it is parameterized by a
/// [`api::Gateway`] bundle of injected collaborators (completion client,
/// notifier client, session store), and only `api::parsing` knows about the
/// Lambda event shape.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use hippo_gateway::api::{Gateway, handler};
/// use hippo_gateway::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     hippo_gateway::setup_logging();
///
///     let config = AppConfig {
///         groq_api_key: "dummy_key".to_string(),
///         groq_model: None,
///         telegram_bot_token: "dummy_token".to_string(),
///         telegram_chat_id: "12345".to_string(),
///         admin_chat_url: "https://admin.hippoclouds.com/live-chat".to_string(),
///         chat_history_keep: 30,
///         live_chat_ttl_secs: 86_400,
///     };
///
///     let gateway = Arc::new(Gateway::new(config));
///     lambda_runtime::run(lambda_runtime::service_fn(
///         move |event: lambda_runtime::LambdaEvent<serde_json::Value>| {
///             let gateway = Arc::clone(&gateway);
///             async move { handler::function_handler(event, &gateway).await }
///         },
///     ))
///     .await
/// }
/// ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod store;

pub use errors::GatewayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda process.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
