//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::user::MIN_PASSWORD_LENGTH;

const MIN_SESSION_TTL_SECS: u64 = 60;
const MAX_SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Login session and account seeding configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Account created at startup when no accounts exist
    pub bootstrap_email: Option<String>,

    pub bootstrap_password: Option<SecretString>,
}

impl AuthConfig {
    /// Get session TTL as Duration
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Bootstrap credentials, when both are set.
    pub fn bootstrap_account(&self) -> Option<(&str, &SecretString)> {
        match (&self.bootstrap_email, &self.bootstrap_password) {
            (Some(email), Some(password)) => Some((email.as_str(), password)),
            _ => None,
        }
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_SESSION_TTL_SECS..=MAX_SESSION_TTL_SECS).contains(&self.session_ttl_secs) {
            return Err(ValidationError::InvalidSessionTtl);
        }

        match (&self.bootstrap_email, &self.bootstrap_password) {
            (None, None) => Ok(()),
            (Some(_), Some(password)) => {
                if password.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
                    Err(ValidationError::BootstrapPasswordTooShort(MIN_PASSWORD_LENGTH))
                } else {
                    Ok(())
                }
            }
            _ => Err(ValidationError::IncompleteBootstrapAccount),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: default_session_ttl(),
            bootstrap_email: None,
            bootstrap_password: None,
        }
    }
}

fn default_session_ttl() -> u64 {
    8 * 60 * 60
}
