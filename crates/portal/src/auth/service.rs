//! Login and token authentication flows.

use chrono::Utc;
use sqlx::PgPool;

use samaj_core::Email;

use super::{password::verify_password, AuthError, IssuedToken, TokenSigner};
use crate::db::AdminAccountRepository;
use crate::models::admin_account::CurrentAdmin;

/// Authentication service over the admin account store.
///
/// Every failure path out of `login` collapses to
/// `AuthError::AuthenticationFailed` so the response never reveals
/// whether the email exists, the password was wrong, or the account was
/// deactivated. Internal causes are logged, not returned.
pub struct AuthService<'a> {
    accounts: AdminAccountRepository<'a>,
    tokens: &'a TokenSigner,
}

impl<'a> AuthService<'a> {
    /// Create an authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, tokens: &'a TokenSigner) -> Self {
        Self {
            accounts: AdminAccountRepository::new(pool),
            tokens,
        }
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// The active check runs after password verification, so a login
    /// against a deactivated account is indistinguishable from a wrong
    /// password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` on every failure path.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::AuthenticationFailed)?;

        let Some((account, stored_hash)) = self
            .accounts
            .find_by_email_with_hash(&email)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "credential lookup failed during login");
                AuthError::AuthenticationFailed
            })?
        else {
            return Err(AuthError::AuthenticationFailed);
        };

        let matches = verify_password(password, &stored_hash).map_err(|e| {
            tracing::warn!(error = %e, account_id = %account.id, "password verification errored");
            AuthError::AuthenticationFailed
        })?;
        if !matches {
            return Err(AuthError::AuthenticationFailed);
        }

        if !account.active {
            return Err(AuthError::AuthenticationFailed);
        }

        let issued = self.tokens.issue(account.id).map_err(|e| {
            tracing::warn!(error = %e, account_id = %account.id, "token signing failed");
            AuthError::AuthenticationFailed
        })?;

        // Best effort; a failed timestamp update must not fail the login.
        if let Err(e) = self
            .accounts
            .touch_last_authenticated(account.id, Utc::now())
            .await
        {
            tracing::warn!(error = %e, account_id = %account.id, "failed to record login time");
        }

        Ok(issued)
    }

    /// Resolve a bearer token to the current admin.
    ///
    /// Role and active status come from the database row, never from
    /// the token, so a deactivation or role change is picked up on the
    /// next request.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if the token fails validation,
    /// `AuthError::Unauthenticated` if the account is gone or inactive.
    pub async fn authenticate(&self, token: &str) -> Result<CurrentAdmin, AuthError> {
        let id = self.tokens.verify(token)?;

        let account = self
            .accounts
            .find_by_id(id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, account_id = %id, "account lookup failed during authentication");
                AuthError::Unauthenticated
            })?
            .ok_or(AuthError::Unauthenticated)?;

        if !account.active {
            return Err(AuthError::Unauthenticated);
        }

        Ok(CurrentAdmin::from(account))
    }
}
