//! News board route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use samaj_core::NewsId;

use crate::db::NewsRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::news::{CreateNewsInput, News, UpdateNewsInput};
use crate::state::AppState;

use super::{require_non_empty, ListParams};

/// Build the news board routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", put(update).delete(remove))
}

/// Public news listing.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<News>>, AppError> {
    let items = NewsRepository::new(state.pool())
        .list(params.effective_limit())
        .await?;

    Ok(Json(items))
}

/// Create a news item.
///
/// # Errors
///
/// Returns 400 if a required field is blank.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateNewsInput>,
) -> Result<(StatusCode, Json<News>), AppError> {
    require_non_empty(&input.title, "title")?;
    require_non_empty(&input.body, "body")?;

    let item = NewsRepository::new(state.pool()).create(&input).await?;

    tracing::info!(actor = %admin.email, news_id = %item.id, "news item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Update a news item.
///
/// # Errors
///
/// Returns 404 if the item does not exist.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateNewsInput>,
) -> Result<Json<News>, AppError> {
    if let Some(title) = &input.title {
        require_non_empty(title, "title")?;
    }
    if let Some(body) = &input.body {
        require_non_empty(body, "body")?;
    }

    let item = NewsRepository::new(state.pool())
        .update(NewsId::new(id), &input)
        .await?;

    tracing::info!(actor = %admin.email, news_id = %item.id, "news item updated");

    Ok(Json(item))
}

/// Delete a news item.
///
/// # Errors
///
/// Returns 404 if the item does not exist.
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    NewsRepository::new(state.pool())
        .delete(NewsId::new(id))
        .await?;

    tracing::info!(actor = %admin.email, news_id = id, "news item deleted");

    Ok(StatusCode::NO_CONTENT)
}
