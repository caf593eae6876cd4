//! User account repository port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::user::UserAccount;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new account.
    ///
    /// # Errors
    ///
    /// - `DuplicateEmail` if the email is registered already
    async fn save(&self, account: &UserAccount) -> Result<(), DomainError>;

    /// Look up an account by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, DomainError>;

    /// Number of registered accounts.
    async fn count(&self) -> Result<u64, DomainError>;
}
