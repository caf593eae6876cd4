//! In-memory login sessions.
//!
//! Tokens are random UUIDs mapped to the user they were issued for and an
//! expiry instant. Expired entries are dropped lazily when presented.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp};
use crate::ports::{SessionStore, SessionValidator};

#[derive(Debug, Clone)]
struct SessionEntry {
    user: AuthenticatedUser,
    expires_at: Timestamp,
}

/// Session store and validator backed by a shared map.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Number of sessions currently held, expired ones included.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn issue(&self, user: AuthenticatedUser) -> Result<String, AuthError> {
        let token = Uuid::new_v4().simple().to_string();
        let entry = SessionEntry {
            user,
            expires_at: Timestamp::now().plus_secs(self.ttl.as_secs()),
        };
        self.sessions.write().await.insert(token.clone(), entry);
        Ok(token)
    }

    async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        self.sessions.write().await.remove(token);
        Ok(())
    }
}

#[async_trait]
impl SessionValidator for InMemorySessionStore {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let entry = self
            .sessions
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)?;

        if entry.expires_at.is_before(&Timestamp::now()) {
            self.sessions.write().await.remove(token);
            tracing::debug!("Session expired and was dropped");
            return Err(AuthError::SessionExpired);
        }

        Ok(entry.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(), "tech@lab.example")
    }

    #[tokio::test]
    async fn issued_token_validates_until_revoked() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        let u = user();
        let token = store.issue(u.clone()).await.unwrap();

        assert_eq!(store.validate(&token).await.unwrap(), u);

        store.revoke(&token).await.unwrap();
        assert_eq!(
            store.validate(&token).await.unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[tokio::test]
    async fn zero_ttl_sessions_expire() {
        let store = InMemorySessionStore::new(Duration::from_secs(0));
        let token = store.issue(user()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        assert_eq!(
            store.validate(&token).await.unwrap_err(),
            AuthError::SessionExpired
        );
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn tokens_are_unique() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        let a = store.issue(user()).await.unwrap();
        let b = store.issue(user()).await.unwrap();
        assert_ne!(a, b);
    }
}
