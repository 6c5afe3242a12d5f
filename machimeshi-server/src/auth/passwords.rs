//! Argon2id password hashing helpers shared by the account flows.

use argon2::password_hash::rand_core::OsRng;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use thiserror::Error;

/// Errors produced while hashing or verifying passwords.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// Hashing the supplied password failed.
    #[error("failed to hash password")]
    Hash,

    /// The stored hash could not be parsed.
    #[error("stored password hash is malformed")]
    Malformed,
}

/// Compute an Argon2id password hash.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| PasswordError::Hash)
}

/// Verify a password against an encoded Argon2id hash.
pub fn verify_password(password: &str, encoded_hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(encoded_hash).map_err(|_| PasswordError::Malformed)?;
    let argon2 = Argon2::default();
    Ok(argon2
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn distinct_hashes_for_same_password() {
        let first = hash_password("secret").unwrap();
        let second = hash_password("secret").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_hash_is_rejected() {
        let result = verify_password("secret", "not-a-phc-string");
        assert_eq!(result, Err(PasswordError::Malformed));
    }
}
