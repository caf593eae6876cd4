//! User account aggregate.
//!
//! Passwords are stored as argon2 PHC strings; the plaintext never leaves the
//! hashing call.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    id: UserId,
    email: String,
    password_hash: String,
    created_at: Timestamp,
}

impl UserAccount {
    /// Register a new account, hashing the password.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the email has no `@`
    /// - `OutOfRange` if the password is shorter than [`MIN_PASSWORD_LENGTH`]
    pub fn register(
        id: UserId,
        email: &str,
        password: &SecretString,
    ) -> Result<Self, ValidationError> {
        let email = normalize_email(email)?;
        let length = password.expose_secret().chars().count();
        if length < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::out_of_range(
                "password",
                MIN_PASSWORD_LENGTH as i64,
                1024,
                length as i64,
            ));
        }

        let password_hash = hash_password(&Argon2::default(), password.expose_secret())
            .map_err(|e| ValidationError::invalid_format("password", e.to_string()))?;

        Ok(Self {
            id,
            email,
            password_hash,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute an account from persistence (no validation).
    pub fn reconstitute(
        id: UserId,
        email: String,
        password_hash: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Checks a candidate password. A corrupt stored hash never verifies.
    pub fn verify_password(&self, candidate: &SecretString) -> bool {
        verify_password(&self.password_hash, candidate.expose_secret())
    }
}

/// Lower-cases and trims an email, requiring an `@` with text on both sides.
pub fn normalize_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(ValidationError::invalid_format("email", "missing @ symbol")),
    }
}

fn hash_password(argon2: &Argon2, pw: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(argon2.hash_password(pw.as_bytes(), &salt)?.to_string())
}

fn verify_password(hash: &str, pw: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(pw.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    #[test]
    fn register_hashes_and_verifies_password() {
        let account =
            UserAccount::register(UserId::new(), "Tech@Lab.Example ", &secret("correct horse"))
                .unwrap();
        assert_eq!(account.email(), "tech@lab.example");
        assert_ne!(account.password_hash(), "correct horse");
        assert!(account.verify_password(&secret("correct horse")));
        assert!(!account.verify_password(&secret("wrong horse")));
    }

    #[test]
    fn short_password_is_rejected() {
        let err = UserAccount::register(UserId::new(), "a@b.c", &secret("short")).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn email_without_at_is_rejected() {
        assert!(normalize_email("not-an-email").is_err());
        assert!(normalize_email("@lab").is_err());
        assert!(normalize_email("").is_err());
    }

    #[test]
    fn corrupt_hash_never_verifies() {
        let account = UserAccount::reconstitute(
            UserId::new(),
            "a@b.c".to_string(),
            "not-a-phc-string".to_string(),
            Timestamp::now(),
        );
        assert!(!account.verify_password(&secret("anything")));
    }
}
