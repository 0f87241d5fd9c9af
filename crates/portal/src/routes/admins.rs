//! Admin account management route handlers (super admin only).
//!
//! Every mutation here is picked up by the request guard on the
//! target's next request: deactivation works as a forced logout and a
//! role change applies without reissuing tokens.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use samaj_core::{AdminAccountId, AdminRole, Email};

use crate::auth::{hash_password, MIN_PASSWORD_LENGTH};
use crate::db::AdminAccountRepository;
use crate::error::AppError;
use crate::middleware::RequireSuperAdmin;
use crate::models::admin_account::AdminAccount;
use crate::state::AppState;

/// Build the admin account routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}/role", put(update_role))
        .route("/{id}/active", put(update_active))
}

/// List all admin accounts.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub async fn list(
    RequireSuperAdmin(_caller): RequireSuperAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminAccount>>, AppError> {
    let accounts = AdminAccountRepository::new(state.pool()).list_all().await?;
    Ok(Json(accounts))
}

/// Request body for creating an admin account.
#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
    /// Defaults to `standard_admin` when omitted.
    #[serde(default)]
    pub role: AdminRole,
}

/// Create an admin account.
///
/// # Errors
///
/// Returns 400 on invalid input, 409 if the email is already taken.
pub async fn create(
    RequireSuperAdmin(caller): RequireSuperAdmin,
    State(state): State<AppState>,
    Json(body): Json<CreateAdminRequest>,
) -> Result<(StatusCode, Json<AdminAccount>), AppError> {
    let email = Email::parse(&body.email)
        .map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))?;

    if body.full_name.trim().is_empty() {
        return Err(AppError::BadRequest("full_name is required".to_owned()));
    }

    if body.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let password_hash = hash_password(&body.password, state.config().hashing())?;

    let account = AdminAccountRepository::new(state.pool())
        .create(&email, body.full_name.trim(), &password_hash, body.role)
        .await?;

    tracing::info!(
        actor = %caller.email,
        created = %account.email,
        role = %account.role,
        "admin account created"
    );

    Ok((StatusCode::CREATED, Json(account)))
}

/// Request body for changing an account's role.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: AdminRole,
}

/// Change an account's role.
///
/// # Errors
///
/// Returns 404 if the account does not exist.
pub async fn update_role(
    RequireSuperAdmin(caller): RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateRoleRequest>,
) -> Result<Json<AdminAccount>, AppError> {
    let account = AdminAccountRepository::new(state.pool())
        .update_role(AdminAccountId::new(id), body.role)
        .await?;

    tracing::info!(
        actor = %caller.email,
        target = %account.email,
        role = %account.role,
        "admin role changed"
    );

    Ok(Json(account))
}

/// Request body for activating or deactivating an account.
#[derive(Debug, Deserialize)]
pub struct UpdateActiveRequest {
    pub active: bool,
}

/// Activate or deactivate an account.
///
/// # Errors
///
/// Returns 404 if the account does not exist.
pub async fn update_active(
    RequireSuperAdmin(caller): RequireSuperAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateActiveRequest>,
) -> Result<Json<AdminAccount>, AppError> {
    let account = AdminAccountRepository::new(state.pool())
        .set_active(AdminAccountId::new(id), body.active)
        .await?;

    tracing::info!(
        actor = %caller.email,
        target = %account.email,
        active = account.active,
        "admin account active flag changed"
    );

    Ok(Json(account))
}
