//! HTTP surface of the gateway.
//!
//! `handler` is the Lambda entry point and router; `parsing` adapts the
//! Lambda proxy event; the per-domain handlers hold the business flow and are
//! deployment-agnostic.

pub mod chat_handler;
pub mod contact_handler;
pub mod gateway;
pub mod handler;
pub mod helpers;
pub mod live_chat_handler;
pub mod parsing;

pub use gateway::Gateway;
