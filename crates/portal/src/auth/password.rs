//! Password hashing with argon2id.
//!
//! Hashes are stored as PHC strings, so the parameters travel with the
//! hash and verification works across parameter changes.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

use crate::config::HashingConfig;

/// Minimum length accepted for a new password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Error from password hashing or hash parsing.
#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(String);

fn hasher(config: &HashingConfig) -> Result<Argon2<'static>, PasswordHashError> {
    let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
        .map_err(|e| PasswordHashError(e.to_string()))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash a password with argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns `PasswordHashError` if the configured parameters are rejected
/// or hashing fails.
pub fn hash_password(password: &str, config: &HashingConfig) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher(config)?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordHashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string.
///
/// A mismatched password is `Ok(false)`, not an error; `Err` means the
/// stored hash could not be parsed or the verifier itself failed.
///
/// # Errors
///
/// Returns `PasswordHashError` if the stored hash is malformed.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PasswordHashError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| PasswordHashError(e.to_string()))?;

    // Verification takes its parameters from the hash string, so older
    // hashes keep working after a parameter bump.
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordHashError(e.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // Small parameters keep the tests fast; production values come from
    // `HashingConfig::default`.
    fn test_config() -> HashingConfig {
        HashingConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery", &test_config()).unwrap();
        assert!(verify_password("correct horse battery", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let hash = hash_password("correct horse battery", &test_config()).unwrap();
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let config = test_config();
        let first = hash_password("same password", &config).unwrap();
        let second = hash_password("same password", &config).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_is_phc_argon2id() {
        let hash = hash_password("some password", &test_config()).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("m=1024"));
    }

    #[test]
    fn test_malformed_stored_hash_is_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
