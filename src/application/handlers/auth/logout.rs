//! LogoutHandler - Revokes a session token.

use std::sync::Arc;

use crate::domain::foundation::AuthError;
use crate::ports::SessionStore;

pub struct LogoutHandler {
    sessions: Arc<dyn SessionStore>,
}

impl LogoutHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Revoking an unknown token is not an error.
    pub async fn handle(&self, token: &str) -> Result<(), AuthError> {
        self.sessions.revoke(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::domain::foundation::{AuthenticatedUser, UserId};
    use crate::ports::SessionValidator;
    use std::time::Duration;

    #[tokio::test]
    async fn revoked_token_no_longer_validates() {
        let sessions = Arc::new(InMemorySessionStore::new(Duration::from_secs(60)));
        let token = sessions
            .issue(AuthenticatedUser::new(UserId::new(), "a@b.c"))
            .await
            .unwrap();

        LogoutHandler::new(sessions.clone()).handle(&token).await.unwrap();

        assert_eq!(
            sessions.validate(&token).await.unwrap_err(),
            AuthError::InvalidToken
        );
        assert!(LogoutHandler::new(sessions).handle(&token).await.is_ok());
    }
}
