//! Authentication extractors for protected routes.
//!
//! Handlers opt in by taking `RequireAdmin` or `RequireSuperAdmin` as an
//! argument. Both hit the database on every request, so deactivations
//! and role changes apply immediately.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::auth::{AuthError, AuthService};
use crate::models::admin_account::CurrentAdmin;
use crate::state::AppState;

/// Extract the bearer token from the `Authorization` header.
///
/// The scheme match is exact; anything other than `Bearer ` is treated
/// as absent.
fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let header_value = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::Unauthenticated)?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::Unauthenticated)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::Unauthenticated);
    }

    Ok(token)
}

/// Requires a valid bearer token for an active admin account.
///
/// Rejects with 401 when the token is missing, invalid, expired, or the
/// account behind it is gone or deactivated.
pub struct RequireAdmin(pub CurrentAdmin);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let admin = AuthService::new(state.pool(), state.tokens())
            .authenticate(token)
            .await?;

        Ok(Self(admin))
    }
}

/// Requires an active super admin account.
///
/// Identity is established first, so a missing or bad token is 401 even
/// on super-admin-only routes; 403 means "authenticated but not super".
pub struct RequireSuperAdmin(pub CurrentAdmin);

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireAdmin(admin) = RequireAdmin::from_request_parts(parts, state).await?;

        if !admin.role.is_super_admin() {
            return Err(AuthError::Forbidden);
        }

        Ok(Self(admin))
    }
}
