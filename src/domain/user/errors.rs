//! Account registration errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("An account already exists for {0}")]
    DuplicateEmail(String),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AccountError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::Validation(_) => ErrorCode::ValidationFailed,
            AccountError::DuplicateEmail(_) => ErrorCode::DuplicateEmail,
            AccountError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateEmail => {
                AccountError::DuplicateEmail(err.details.get("email").cloned().unwrap_or_default())
            }
            _ => AccountError::Infrastructure(err.to_string()),
        }
    }
}
