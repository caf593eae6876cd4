//! LoginHandler - Exchanges email and password for a session token.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::domain::user::normalize_email;
use crate::ports::{SessionStore, UserRepository};

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub user: AuthenticatedUser,
}

pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl LoginHandler {
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { users, sessions }
    }

    /// Unknown email and wrong password fail identically.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AuthError> {
        let email = normalize_email(&cmd.email).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self.users.find_by_email(&email).await.map_err(|e| {
            tracing::error!(error = %e, "User lookup failed during login");
            AuthError::service_unavailable(e.to_string())
        })?;

        let account = match account {
            Some(account) if account.verify_password(&cmd.password) => account,
            _ => {
                tracing::warn!(email = %email, "Rejected login");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let user = AuthenticatedUser::new(*account.id(), account.email());
        let token = self.sessions.issue(user.clone()).await?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(LoginResult { token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemorySessionStore, InMemoryUserRepository};
    use crate::domain::foundation::UserId;
    use crate::domain::user::UserAccount;
    use crate::ports::SessionValidator;
    use std::time::Duration;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    async fn setup() -> (LoginHandler, Arc<InMemorySessionStore>) {
        let users = InMemoryUserRepository::new();
        let account =
            UserAccount::register(UserId::new(), "tech@lab.example", &secret("pipette-42")).unwrap();
        users.save(&account).await.unwrap();
        let sessions = Arc::new(InMemorySessionStore::new(Duration::from_secs(60)));
        (LoginHandler::new(Arc::new(users), sessions.clone()), sessions)
    }

    #[tokio::test]
    async fn valid_credentials_issue_a_usable_token() {
        let (handler, sessions) = setup().await;
        let result = handler
            .handle(LoginCommand {
                email: " Tech@Lab.example".to_string(),
                password: secret("pipette-42"),
            })
            .await
            .unwrap();

        let user = sessions.validate(&result.token).await.unwrap();
        assert_eq!(user, result.user);
        assert_eq!(user.email, "tech@lab.example");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_fail_the_same_way() {
        let (handler, sessions) = setup().await;
        let wrong_password = handler
            .handle(LoginCommand {
                email: "tech@lab.example".to_string(),
                password: secret("pipette-43"),
            })
            .await
            .unwrap_err();
        let unknown_email = handler
            .handle(LoginCommand {
                email: "nobody@lab.example".to_string(),
                password: secret("pipette-42"),
            })
            .await
            .unwrap_err();

        assert_eq!(wrong_password, AuthError::InvalidCredentials);
        assert_eq!(unknown_email, AuthError::InvalidCredentials);
        assert_eq!(sessions.session_count().await, 0);
    }
}
