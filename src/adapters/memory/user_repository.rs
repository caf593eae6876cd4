//! In-memory user account repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::user::UserAccount;
use crate::ports::UserRepository;

/// Accounts keyed by normalized email.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    accounts: Arc<RwLock<HashMap<String, UserAccount>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, account: &UserAccount) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.email()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateEmail,
                format!("Email already registered: {}", account.email()),
            )
            .with_detail("email", account.email()));
        }
        accounts.insert(account.email().to_string(), account.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, DomainError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.accounts.read().await.len() as u64)
    }
}
