//! In-process session store.

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

use super::SessionStore;
use crate::core::models::{ChatTurn, LiveChatSession, SessionStatus};
use crate::errors::GatewayError;

/// Process-local store. State lives only as long as the hosting process;
/// live-chat sessions additionally expire after an idle TTL, evicted lazily
/// on access.
pub struct MemoryStore {
    histories: RwLock<HashMap<String, Vec<ChatTurn>>>,
    live_sessions: RwLock<HashMap<String, LiveChatSession>>,
    live_ttl: ChronoDuration,
}

impl MemoryStore {
    pub fn new(live_ttl: Duration) -> Self {
        Self {
            histories: RwLock::new(HashMap::new()),
            live_sessions: RwLock::new(HashMap::new()),
            live_ttl: ChronoDuration::from_std(live_ttl)
                .unwrap_or_else(|_| ChronoDuration::seconds(86_400)),
        }
    }

    fn is_expired(&self, session: &LiveChatSession) -> bool {
        Utc::now() - session.last_activity > self.live_ttl
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get_history(
        &self,
        session_id: &str,
    ) -> Result<Option<Vec<ChatTurn>>, GatewayError> {
        Ok(self.histories.read().await.get(session_id).cloned())
    }

    async fn put_history(
        &self,
        session_id: &str,
        history: Vec<ChatTurn>,
    ) -> Result<(), GatewayError> {
        self.histories
            .write()
            .await
            .insert(session_id.to_string(), history);
        Ok(())
    }

    async fn delete_history(&self, session_id: &str) -> Result<(), GatewayError> {
        self.histories.write().await.remove(session_id);
        Ok(())
    }

    async fn clear_histories(&self) -> Result<(), GatewayError> {
        self.histories.write().await.clear();
        Ok(())
    }

    async fn get_live(
        &self,
        session_id: &str,
    ) -> Result<Option<LiveChatSession>, GatewayError> {
        let mut sessions = self.live_sessions.write().await;
        match sessions.get(session_id) {
            Some(session) if self.is_expired(session) => {
                sessions.remove(session_id);
                Ok(None)
            }
            Some(session) => Ok(Some(session.clone())),
            None => Ok(None),
        }
    }

    async fn put_live(&self, session: LiveChatSession) -> Result<(), GatewayError> {
        self.live_sessions
            .write()
            .await
            .insert(session.session_id.clone(), session);
        Ok(())
    }

    async fn list_active_live(&self) -> Result<Vec<LiveChatSession>, GatewayError> {
        let mut sessions = self.live_sessions.write().await;
        sessions.retain(|_, s| !(Utc::now() - s.last_activity > self.live_ttl));
        let mut active: Vec<LiveChatSession> = sessions
            .values()
            .filter(|s| s.status == SessionStatus::Active)
            .cloned()
            .collect();
        active.sort_by(|a, b| a.started_at.cmp(&b.started_at));
        Ok(active)
    }
}
