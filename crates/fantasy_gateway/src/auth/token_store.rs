//! In-memory session token store
//!
//! Holds at most one bearer token for the lifetime of the process. There is
//! no persistence, expiry tracking or refresh: a new successful code exchange
//! simply replaces whatever was stored before.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// Bearer token obtained from a successful code exchange
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub access_token: String,
    pub obtained_at: DateTime<Utc>,
}

impl SessionToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            obtained_at: Utc::now(),
        }
    }

    /// Value for an `Authorization` header
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

// Keep the secret out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("access_token", &"<redacted>")
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}

/// Single-session token slot shared by all request handlers.
///
/// Cloning yields another handle to the same slot.
#[derive(Clone, Default)]
pub struct SessionStore {
    slot: Arc<RwLock<Option<SessionToken>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored token unconditionally (last write wins)
    pub async fn set(&self, token: SessionToken) {
        *self.slot.write().await = Some(token);
    }

    /// Snapshot of the current token
    pub async fn get(&self) -> Option<SessionToken> {
        self.slot.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_empty() {
        let store = SessionStore::new();
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = SessionStore::new();
        store.set(SessionToken::new("first")).await;
        store.set(SessionToken::new("second")).await;

        let token = store.get().await.unwrap();
        assert_eq!(token.access_token, "second");
    }

    #[tokio::test]
    async fn test_clones_share_slot() {
        let store = SessionStore::new();
        let handle = store.clone();
        handle.set(SessionToken::new("shared")).await;
        assert_eq!(store.get().await.unwrap().access_token, "shared");
    }

    #[test]
    fn test_debug_redacts_token() {
        let token = SessionToken::new("super-secret");
        let rendered = format!("{:?}", token);
        assert!(!rendered.contains("super-secret"));
        assert_eq!(token.bearer_header(), "Bearer super-secret");
    }
}
