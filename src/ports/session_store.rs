//! Login session store port.
//!
//! Issues and revokes the opaque tokens handed out at login. Validation of
//! presented tokens goes through [`SessionValidator`](super::SessionValidator),
//! which session stores normally implement as well.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Start a session for `user` and return its bearer token.
    async fn issue(&self, user: AuthenticatedUser) -> Result<String, AuthError>;

    /// End a session. Unknown tokens are ignored.
    async fn revoke(&self, token: &str) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }
}
