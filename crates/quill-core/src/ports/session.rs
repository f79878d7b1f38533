//! Session store port.
//!
//! Sessions are server-side state: login creates a record keyed by an opaque
//! token, logout destroys it. The token itself travels in a cookie; handlers
//! only ever see the record.

use async_trait::async_trait;
use uuid::Uuid;

/// Snapshot of the authenticated user bound to a session token.
///
/// `is_superuser` is captured at login time.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub user_id: Uuid,
    pub username: String,
    pub is_superuser: bool,
}

/// Session store trait - abstraction over session backends.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a session and return its opaque token.
    async fn create(&self, record: SessionRecord) -> Result<String, SessionError>;

    /// Look up the record bound to a token, if any.
    async fn get(&self, token: &str) -> Result<Option<SessionRecord>, SessionError>;

    /// Destroy a session. Destroying an unknown token is a no-op.
    async fn destroy(&self, token: &str) -> Result<(), SessionError>;
}

/// Session store operation errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session backend failure: {0}")]
    Backend(String),
}
