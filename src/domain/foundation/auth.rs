//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is what the HTTP middleware injects into request
//! extensions once a session token has been validated through the
//! `SessionValidator` port. Nothing here depends on how sessions are stored.

use super::UserId;
use thiserror::Error;

/// A user whose session token has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Account identifier.
    pub id: UserId,

    /// Login email, lower-cased.
    pub email: String,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Authentication errors for login and token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The token is unknown or was revoked.
    #[error("Invalid session token")]
    InvalidToken,

    /// The token existed but its TTL has elapsed.
    #[error("Session expired")]
    SessionExpired,

    /// The credential store could not be reached.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if the client should log in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::SessionExpired | AuthError::InvalidCredentials
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_new_keeps_fields() {
        let id = UserId::new();
        let user = AuthenticatedUser::new(id, "tech@lab.example");
        assert_eq!(user.id, id);
        assert_eq!(user.email, "tech@lab.example");
    }

    #[test]
    fn expired_and_invalid_tokens_require_reauthentication() {
        assert!(AuthError::SessionExpired.requires_reauthentication());
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(!AuthError::service_unavailable("db down").requires_reauthentication());
    }

    #[test]
    fn credentials_error_message_does_not_leak_which_part_failed() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }
}
