//! Authentication error types.
//!
//! Failure messages are deliberately uniform: a failed login never says
//! whether the email was unknown, the password wrong, or the account
//! deactivated.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors returned by the authentication flows and the request guards.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login failed. Covers unknown email, wrong password, and
    /// deactivated accounts alike.
    #[error("invalid email or password")]
    AuthenticationFailed,

    /// No usable bearer token was presented, or the account behind a
    /// valid token no longer passes the checks.
    #[error("authentication required")]
    Unauthenticated,

    /// The bearer token failed signature or expiry validation.
    #[error("invalid or expired token")]
    InvalidToken,

    /// The authenticated account lacks the required role.
    #[error("admin privileges required")]
    Forbidden,
}

impl AuthError {
    /// HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthenticationFailed | Self::Unauthenticated | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_failures_are_unauthorized() {
        assert_eq!(
            AuthError::AuthenticationFailed.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_forbidden_is_403() {
        assert_eq!(AuthError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_login_failure_message_names_no_cause() {
        let message = AuthError::AuthenticationFailed.to_string();
        assert_eq!(message, "invalid email or password");
        assert!(!message.contains("unknown"));
        assert!(!message.contains("deactivated"));
    }
}
