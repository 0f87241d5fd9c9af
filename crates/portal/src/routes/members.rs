//! Member directory route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use samaj_core::MemberId;

use crate::db::MemberRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::member::{CreateMemberInput, Member, UpdateMemberInput};
use crate::state::AppState;

use super::{require_non_empty, ListParams};

/// Build the member routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", put(update).delete(remove))
}

/// Public member directory listing.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Member>>, AppError> {
    let members = MemberRepository::new(state.pool())
        .list(params.effective_limit())
        .await?;

    Ok(Json(members))
}

/// Create a member.
///
/// # Errors
///
/// Returns 400 if a required field is blank.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMemberInput>,
) -> Result<(StatusCode, Json<Member>), AppError> {
    require_non_empty(&input.full_name, "full_name")?;
    require_non_empty(&input.city, "city")?;
    require_non_empty(&input.phone, "phone")?;

    let member = MemberRepository::new(state.pool()).create(&input).await?;

    tracing::info!(actor = %admin.email, member_id = %member.id, "member created");

    Ok((StatusCode::CREATED, Json(member)))
}

/// Update a member.
///
/// # Errors
///
/// Returns 404 if the member does not exist.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateMemberInput>,
) -> Result<Json<Member>, AppError> {
    if let Some(full_name) = &input.full_name {
        require_non_empty(full_name, "full_name")?;
    }
    if let Some(city) = &input.city {
        require_non_empty(city, "city")?;
    }
    if let Some(phone) = &input.phone {
        require_non_empty(phone, "phone")?;
    }

    let member = MemberRepository::new(state.pool())
        .update(MemberId::new(id), &input)
        .await?;

    tracing::info!(actor = %admin.email, member_id = %member.id, "member updated");

    Ok(Json(member))
}

/// Delete a member.
///
/// # Errors
///
/// Returns 404 if the member does not exist.
pub async fn remove(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    MemberRepository::new(state.pool())
        .delete(MemberId::new(id))
        .await?;

    tracing::info!(actor = %admin.email, member_id = id, "member deleted");

    Ok(StatusCode::NO_CONTENT)
}
