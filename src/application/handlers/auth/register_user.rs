//! RegisterUserHandler - Creates staff accounts.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::foundation::UserId;
use crate::domain::user::{AccountError, UserAccount};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub email: String,
    pub password: SecretString,
}

pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<UserAccount, AccountError> {
        let account = UserAccount::register(UserId::new(), &cmd.email, &cmd.password)?;
        self.users.save(&account).await?;
        tracing::info!(user_id = %account.id(), email = %account.email(), "User registered");
        Ok(account)
    }

    /// Seeds the first account when none exist. Returns `None` when accounts
    /// are already present.
    pub async fn ensure_bootstrap(
        &self,
        cmd: RegisterUserCommand,
    ) -> Result<Option<UserAccount>, AccountError> {
        if self.users.count().await? > 0 {
            tracing::debug!("Accounts present, skipping bootstrap account");
            return Ok(None);
        }
        self.handle(cmd).await.map(Some)
    }
}
