//! Session validation port.
//!
//! HTTP middleware uses this to turn a bearer token into an
//! [`AuthenticatedUser`]. It is storage-agnostic: the in-memory session store
//! and test doubles implement it alike.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates session tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for unknown or revoked tokens
/// - Return `AuthError::SessionExpired` once a token's TTL has elapsed
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a token (without the `Bearer ` prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
