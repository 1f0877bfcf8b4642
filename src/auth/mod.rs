//! Credential verification.
//!
//! The login contract is intentionally thin (email + password → sanitized
//! account), but the credential check itself is real: Argon2id hashing
//! with per-password salts. A full identity provider can replace this
//! module without touching the request/response shapes.

pub mod password;
