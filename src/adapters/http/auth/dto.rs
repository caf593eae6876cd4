//! HTTP DTOs for authentication endpoints.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::domain::user::UserAccount;

/// Request to log in or to register an account.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub created_at: String,
}

impl From<&UserAccount> for UserResponse {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.id().to_string(),
            email: account.email().to_string(),
            created_at: account.created_at().as_datetime().to_rfc3339(),
        }
    }
}
