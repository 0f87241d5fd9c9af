//! Stateless bearer tokens for the admin session.
//!
//! Tokens are HS256-signed and carry only the account ID plus issue and
//! expiry timestamps. Role and active status are deliberately absent;
//! the request guard re-reads both from the database, so a permission
//! change takes effect on the very next request without any revocation
//! list.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use samaj_core::AdminAccountId;

use super::AuthError;

/// Error from signing a token. Verification failures are reported as
/// `AuthError::InvalidToken` instead.
#[derive(Debug, Error)]
#[error("token signing failed: {0}")]
pub struct TokenSignError(String);

/// Signed token claims.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Account ID as a decimal string.
    sub: String,
    /// Issued-at, seconds since the epoch.
    iat: i64,
    /// Expiry, seconds since the epoch.
    exp: i64,
}

/// A freshly issued bearer token, as returned by login.
#[derive(Debug, Serialize)]
pub struct IssuedToken {
    /// The signed token to present in the `Authorization` header.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies admin bearer tokens.
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl TokenSigner {
    /// Create a signer from the configured secret and lifetime.
    ///
    /// `lifetime_hours` is assumed already range-checked by config
    /// loading.
    #[must_use]
    pub fn new(secret: &SecretString, lifetime_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        // No clock leeway: a token expired by one second is rejected.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret_bytes),
            decoding: DecodingKey::from_secret(secret_bytes),
            validation,
            lifetime: Duration::hours(lifetime_hours),
        }
    }

    /// Issue a token for an account.
    ///
    /// # Errors
    ///
    /// Returns `TokenSignError` if signing fails.
    pub fn issue(&self, id: AdminAccountId) -> Result<IssuedToken, TokenSignError> {
        self.issue_at(id, Utc::now())
    }

    fn issue_at(
        &self,
        id: AdminAccountId,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenSignError> {
        let expires_at = now + self.lifetime;
        let claims = Claims {
            sub: id.as_i32().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenSignError(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token and extract the account ID it was issued for.
    ///
    /// A valid signature proves only that the portal issued the token;
    /// the caller still has to check the account itself.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` on any signature, expiry, or
    /// claim problem.
    pub fn verify(&self, token: &str) -> Result<AdminAccountId, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| AuthError::InvalidToken)?;

        let id: i32 = data
            .claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(AdminAccountId::new(id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new(&SecretString::from("k7rJ2mPx9qLw4vBn8cHd3gTf6yZs1aEu".to_owned()), 24)
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let signer = signer();
        let issued = signer.issue(AdminAccountId::new(42)).unwrap();

        let id = signer.verify(&issued.token).unwrap();
        assert_eq!(id, AdminAccountId::new(42));
    }

    #[test]
    fn test_expires_at_matches_lifetime() {
        let issued = signer().issue(AdminAccountId::new(1)).unwrap();
        let remaining = issued.expires_at - Utc::now();
        assert!(remaining > Duration::hours(23));
        assert!(remaining <= Duration::hours(24));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let signer = signer();
        // Issued 24h + 1s ago, so it expired one second before now.
        let stale = Utc::now() - Duration::hours(24) - Duration::seconds(1);
        let issued = signer.issue_at(AdminAccountId::new(7), stale).unwrap();

        let err = signer.verify(&issued.token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let issued = signer().issue(AdminAccountId::new(7)).unwrap();

        let other = TokenSigner::new(
            &SecretString::from("Wq3xNv8bKf5tRj2yMh7cZd4gLp9sAe6u".to_owned()),
            24,
        );
        let err = other.verify(&issued.token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = signer().verify("not.a.token").unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));

        let err = signer().verify("").unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn test_non_numeric_subject_is_rejected() {
        let signer = signer();
        let claims = Claims {
            sub: "not-a-number".to_owned(),
            iat: Utc::now().timestamp(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &signer.encoding).unwrap();

        let err = signer.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }
}
