//! Argon2id password hashing and verification.

use argon2::{
    Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use once_cell::sync::Lazy;
use rand::rngs::OsRng;
use thiserror::Error;

static ARGON2: Lazy<Argon2<'static>> = Lazy::new(|| {
    // 19 MiB, t=2, p=1: OWASP baseline for Argon2id.
    match Params::new(19 * 1024, 2, 1, None) {
        Ok(params) => Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params),
        Err(_) => Argon2::default(),
    }
});

/// Failure while hashing or parsing a password hash.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Hashing or hash parsing failed.
    #[error("hash error: {0}")]
    Hash(String),
}

/// Hashes a plaintext password into a PHC-format Argon2id string with a
/// freshly generated salt.
///
/// # Errors
///
/// Returns [`PasswordError::Hash`] if the hasher rejects the input.
pub fn hash_password(plain: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    ARGON2
        .hash_password(plain.as_bytes(), &salt)
        .map(|p| p.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Verifies a plaintext password against a stored PHC hash string.
///
/// # Errors
///
/// Returns [`PasswordError::Hash`] if the stored hash cannot be parsed.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|e| PasswordError::Hash(e.to_string()))?;
    Ok(ARGON2.verify_password(plain.as_bytes(), &parsed).is_ok())
}
