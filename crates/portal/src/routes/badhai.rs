//! Badhai (congratulations) board route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use samaj_core::BadhaiId;

use crate::db::BadhaiRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::badhai::{Badhai, CreateBadhaiInput, UpdateBadhaiInput};
use crate::state::AppState;

use super::{require_non_empty, ListParams};

/// Build the badhai board routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", put(update).delete(remove))
}

/// Public badhai board listing.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Badhai>>, AppError> {
    let entries = BadhaiRepository::new(state.pool())
        .list(params.effective_limit())
        .await?;

    Ok(Json(entries))
}

/// Create a badhai entry.
///
/// # Errors
///
/// Returns 400 if a required field is blank.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateBadhaiInput>,
) -> Result<(StatusCode, Json<Badhai>), AppError> {
    require_non_empty(&input.person_name, "person_name")?;
    require_non_empty(&input.occasion, "occasion")?;
    require_non_empty(&input.city, "city")?;

    let entry = BadhaiRepository::new(state.pool()).create(&input).await?;

    tracing::info!(actor = %admin.email, badhai_id = %entry.id, "badhai entry created");

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Update a badhai entry.
///
/// # Errors
///
/// Returns 404 if the entry does not exist.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateBadhaiInput>,
) -> Result<Json<Badhai>, AppError> {
    if let Some(person_name) = &input.person_name {
        require_non_empty(person_name, "person_name")?;
    }
    if let Some(occasion) = &input.occasion {
        require_non_empty(occasion, "occasion")?;
    }
    if let Some(city) = &input.city {
        require_non_empty(city, "city")?;
    }

    let entry = BadhaiRepository::new(state.pool())
        .update(BadhaiId::new(id), &input)
        .await?;

    tracing::info!(actor = %admin.email, badhai_id = %entry.id, "badhai entry updated");

    Ok(Json(entry))
}

/// Delete a badhai entry.
///
/// # Errors
///
/// Returns 404 if the entry does not exist.
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    BadhaiRepository::new(state.pool())
        .delete(BadhaiId::new(id))
        .await?;

    tracing::info!(actor = %admin.email, badhai_id = id, "badhai entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
