//! Sangathan (local chapter) route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use samaj_core::SangathanId;

use crate::db::SangathanRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::sangathan::{CreateSangathanInput, Sangathan, UpdateSangathanInput};
use crate::state::AppState;

use super::{require_non_empty, ListParams};

/// Build the sangathan routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", put(update).delete(remove))
}

/// Public chapter listing.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Sangathan>>, AppError> {
    let chapters = SangathanRepository::new(state.pool())
        .list(params.effective_limit())
        .await?;

    Ok(Json(chapters))
}

/// Create a sangathan.
///
/// # Errors
///
/// Returns 400 if a required field is blank.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSangathanInput>,
) -> Result<(StatusCode, Json<Sangathan>), AppError> {
    require_non_empty(&input.name, "name")?;
    require_non_empty(&input.city, "city")?;

    let chapter = SangathanRepository::new(state.pool()).create(&input).await?;

    tracing::info!(actor = %admin.email, sangathan_id = %chapter.id, "sangathan created");

    Ok((StatusCode::CREATED, Json(chapter)))
}

/// Update a sangathan.
///
/// # Errors
///
/// Returns 404 if the sangathan does not exist.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateSangathanInput>,
) -> Result<Json<Sangathan>, AppError> {
    if let Some(name) = &input.name {
        require_non_empty(name, "name")?;
    }
    if let Some(city) = &input.city {
        require_non_empty(city, "city")?;
    }

    let chapter = SangathanRepository::new(state.pool())
        .update(SangathanId::new(id), &input)
        .await?;

    tracing::info!(actor = %admin.email, sangathan_id = %chapter.id, "sangathan updated");

    Ok(Json(chapter))
}

/// Delete a sangathan.
///
/// # Errors
///
/// Returns 404 if the sangathan does not exist.
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    SangathanRepository::new(state.pool())
        .delete(SangathanId::new(id))
        .await?;

    tracing::info!(actor = %admin.email, sangathan_id = id, "sangathan deleted");

    Ok(StatusCode::NO_CONTENT)
}
