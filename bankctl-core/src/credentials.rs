//! Credential validation and password hashing.
//!
//! Passwords are hashed with argon2id and a per-password random salt; the
//! stored string is the PHC format produced by the `argon2` crate.
//! Verification is constant-time inside the crate - we never compare
//! hashes ourselves.

use argon2::{
    password_hash::{Error as PhcError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use crate::error::{HashError, ValidationError};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A syntactically plausible email address.
///
/// Validation is deliberately shallow: non-empty local part and domain
/// around a single `@`. Real deliverability is not our problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        let valid = match trimmed.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            }
            None => false,
        };
        if !valid {
            return Err(ValidationError::InvalidEmail {
                value: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A registration password that met the length policy.
///
/// Only used on the registration path; login accepts any string and lets
/// verification fail naturally.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }
        if value.len() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(Self(value.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep plaintext out of debug output.
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Hash a password with argon2id and a fresh random salt.
pub fn hash_password(password: &Password) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_str().as_bytes(), &salt)
        .map_err(|_| HashError::Hash)?;
    Ok(hash.to_string())
}

/// Verify a submitted password against a stored PHC hash string.
///
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash
/// itself cannot be parsed or verified structurally.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> Result<bool, HashError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| HashError::MalformedHash)?;
    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PhcError::Password) => Ok(false),
        Err(_) => Err(HashError::MalformedHash),
    }
}
