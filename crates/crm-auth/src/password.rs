//! Argon2id password hashing.
//!
//! Handlers never compare plaintext against storage directly; everything
//! goes through [`hash`] and [`verify`].

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::LazyLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use error_location::ErrorLocation;

static CONTEXT: LazyLock<Argon2<'static>> = LazyLock::new(Argon2::default);

/// Hash a plaintext password into a PHC string with a fresh random salt.
#[track_caller]
pub fn hash(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = CONTEXT
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AuthError::Hash {
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(password_hash.to_string())
}

/// Verify a plaintext password against a stored PHC string.
/// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
#[track_caller]
pub fn verify(password: &str, hash: &str) -> AuthErrorResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::InvalidHash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    match CONTEXT.verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::InvalidHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
