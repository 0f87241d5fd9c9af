//! Birthday board route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use samaj_core::BirthdayId;

use crate::db::BirthdayRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::birthday::{Birthday, CreateBirthdayInput, UpdateBirthdayInput};
use crate::state::AppState;

use super::{require_non_empty, ListParams};

/// Build the birthday board routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", put(update).delete(remove))
}

/// Public birthday board listing.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Birthday>>, AppError> {
    let entries = BirthdayRepository::new(state.pool())
        .list(params.effective_limit())
        .await?;

    Ok(Json(entries))
}

/// Create a birthday entry.
///
/// # Errors
///
/// Returns 400 if a required field is blank.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateBirthdayInput>,
) -> Result<(StatusCode, Json<Birthday>), AppError> {
    require_non_empty(&input.person_name, "person_name")?;
    require_non_empty(&input.city, "city")?;

    let entry = BirthdayRepository::new(state.pool()).create(&input).await?;

    tracing::info!(actor = %admin.email, birthday_id = %entry.id, "birthday entry created");

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Update a birthday entry.
///
/// # Errors
///
/// Returns 404 if the entry does not exist.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateBirthdayInput>,
) -> Result<Json<Birthday>, AppError> {
    if let Some(person_name) = &input.person_name {
        require_non_empty(person_name, "person_name")?;
    }
    if let Some(city) = &input.city {
        require_non_empty(city, "city")?;
    }

    let entry = BirthdayRepository::new(state.pool())
        .update(BirthdayId::new(id), &input)
        .await?;

    tracing::info!(actor = %admin.email, birthday_id = %entry.id, "birthday entry updated");

    Ok(Json(entry))
}

/// Delete a birthday entry.
///
/// # Errors
///
/// Returns 404 if the entry does not exist.
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    BirthdayRepository::new(state.pool())
        .delete(BirthdayId::new(id))
        .await?;

    tracing::info!(actor = %admin.email, birthday_id = id, "birthday entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
