//! In-memory session store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::ports::{SessionError, SessionRecord, SessionStore};

/// In-memory session store using a HashMap behind an async RwLock.
///
/// Tokens are random UUIDs. Sessions are lost on process restart, which
/// only forces users to log in again.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, record: SessionRecord) -> Result<String, SessionError> {
        let token = Uuid::new_v4().to_string();

        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), record);

        Ok(token)
    }

    async fn get(&self, token: &str) -> Result<Option<SessionRecord>, SessionError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(token).cloned())
    }

    async fn destroy(&self, token: &str) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
        Ok(())
    }
}
