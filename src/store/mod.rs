//! Session-state storage seam.
//!
//! Handlers are written against [`SessionStore`]; the backing map can be an
//! external durable store or the in-process [`memory::MemoryStore`]. The
//! in-process variant is invalidated on process restart and is not shared
//! across concurrently scaled instances - callers must not assume otherwise.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::core::models::{ChatTurn, LiveChatSession};
use crate::errors::GatewayError;

#[async_trait]
pub trait SessionStore: Send + Sync {
    // Assistant chat histories, keyed by session token.

    async fn get_history(&self, session_id: &str)
    -> Result<Option<Vec<ChatTurn>>, GatewayError>;

    async fn put_history(
        &self,
        session_id: &str,
        history: Vec<ChatTurn>,
    ) -> Result<(), GatewayError>;

    async fn delete_history(&self, session_id: &str) -> Result<(), GatewayError>;

    async fn clear_histories(&self) -> Result<(), GatewayError>;

    // Live-chat transcripts, keyed by session id.

    async fn get_live(&self, session_id: &str)
    -> Result<Option<LiveChatSession>, GatewayError>;

    async fn put_live(&self, session: LiveChatSession) -> Result<(), GatewayError>;

    /// All sessions still active and within the idle TTL.
    async fn list_active_live(&self) -> Result<Vec<LiveChatSession>, GatewayError>;
}
