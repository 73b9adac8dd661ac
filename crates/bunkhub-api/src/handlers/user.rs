//! User directory handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use bunkhub_core::error::AppError;
use bunkhub_core::types::id::UserId;
use bunkhub_core::types::pagination::PageResponse;
use bunkhub_entity::user::{CreateUser, User};

use crate::error::ApiError;
use crate::dto::request::CreateUserRequest;
use crate::dto::response::ApiResponse;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<User>>>, ApiError> {
    let users = state
        .user_service
        .list_users(params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .create_user(CreateUser {
            username: req.username,
            display_name: req.display_name,
            role: req.role,
        })
        .await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(ApiResponse::ok(user)))
}
