//! Shok (condolences) board route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use samaj_core::ShokId;

use crate::db::ShokRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::shok::{CreateShokInput, Shok, UpdateShokInput};
use crate::state::AppState;

use super::{require_non_empty, ListParams};

/// Build the shok board routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", put(update).delete(remove))
}

/// Public shok board listing.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Shok>>, AppError> {
    let entries = ShokRepository::new(state.pool())
        .list(params.effective_limit())
        .await?;

    Ok(Json(entries))
}

/// Create a shok entry.
///
/// # Errors
///
/// Returns 400 if a required field is blank.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateShokInput>,
) -> Result<(StatusCode, Json<Shok>), AppError> {
    require_non_empty(&input.deceased_name, "deceased_name")?;
    require_non_empty(&input.city, "city")?;

    let entry = ShokRepository::new(state.pool()).create(&input).await?;

    tracing::info!(actor = %admin.email, shok_id = %entry.id, "shok entry created");

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Update a shok entry.
///
/// # Errors
///
/// Returns 404 if the entry does not exist.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateShokInput>,
) -> Result<Json<Shok>, AppError> {
    if let Some(deceased_name) = &input.deceased_name {
        require_non_empty(deceased_name, "deceased_name")?;
    }
    if let Some(city) = &input.city {
        require_non_empty(city, "city")?;
    }

    let entry = ShokRepository::new(state.pool())
        .update(ShokId::new(id), &input)
        .await?;

    tracing::info!(actor = %admin.email, shok_id = %entry.id, "shok entry updated");

    Ok(Json(entry))
}

/// Delete a shok entry.
///
/// # Errors
///
/// Returns 404 if the entry does not exist.
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    ShokRepository::new(state.pool())
        .delete(ShokId::new(id))
        .await?;

    tracing::info!(actor = %admin.email, shok_id = id, "shok entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
