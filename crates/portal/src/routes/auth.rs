//! Authentication route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::auth::{
    hash_password, verify_password, AuthError, AuthService, IssuedToken, MIN_PASSWORD_LENGTH,
};
use crate::db::AdminAccountRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::admin_account::CurrentAdmin;
use crate::state::AppState;

/// Build the auth routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/password", post(change_password))
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Exchange email + password for a bearer token.
///
/// # Errors
///
/// Returns 400 if either field is blank, 401 if the credentials are
/// rejected for any reason.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<IssuedToken>, AppError> {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".to_owned(),
        ));
    }

    let issued = AuthService::new(state.pool(), state.tokens())
        .login(&body.email, &body.password)
        .await?;

    Ok(Json(issued))
}

/// Current admin profile, as established by the request guard.
pub async fn me(RequireAdmin(admin): RequireAdmin) -> Json<CurrentAdmin> {
    Json(admin)
}

/// Password change request body.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Change the caller's own password.
///
/// # Errors
///
/// Returns 400 if the new password is too short, 401 if the current
/// password does not match.
pub async fn change_password(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<StatusCode, AppError> {
    if body.new_password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "new password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let repo = AdminAccountRepository::new(state.pool());
    let stored_hash = repo
        .password_hash(admin.id)
        .await?
        .ok_or(AuthError::Unauthenticated)?;

    // Same uniform 401 as login; no hint about which check failed.
    if !verify_password(&body.current_password, &stored_hash)? {
        return Err(AuthError::AuthenticationFailed.into());
    }

    let new_hash = hash_password(&body.new_password, state.config().hashing())?;
    repo.update_password_hash(admin.id, &new_hash).await?;

    tracing::info!(account_id = %admin.id, "admin changed their password");

    Ok(StatusCode::NO_CONTENT)
}
