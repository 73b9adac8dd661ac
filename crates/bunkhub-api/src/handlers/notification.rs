//! Notification handlers.
//!
//! The recipient is identified by a `user_id` query parameter; request
//! authentication is out of scope for this service.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use bunkhub_core::types::id::{NotificationId, UserId};
use bunkhub_core::types::pagination::PageResponse;
use bunkhub_entity::notification::Notification;

use crate::error::ApiError;
use crate::dto::response::{ApiResponse, CountResponse, MessageResponse};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Query parameters identifying the inbox owner.
#[derive(Debug, Deserialize)]
pub struct InboxParams {
    /// The user whose inbox is addressed.
    pub user_id: UserId,
}

/// GET /api/notifications?user_id=...
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<InboxParams>,
    Query(page): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Notification>>>, ApiError> {
    let page = state
        .notification_service
        .list_for_user(params.user_id, page.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/notifications/unread-count?user_id=...
pub async fn unread_count(
    State(state): State<AppState>,
    Query(params): Query<InboxParams>,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.notification_service.unread_count(params.user_id).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// PUT /api/notifications/{id}/read?user_id=...
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<NotificationId>,
    Query(params): Query<InboxParams>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .notification_service
        .mark_read(id, params.user_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Marked as read".to_string(),
    })))
}

/// PUT /api/notifications/read-all?user_id=...
pub async fn mark_all_read(
    State(state): State<AppState>,
    Query(params): Query<InboxParams>,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state
        .notification_service
        .mark_all_read(params.user_id)
        .await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// DELETE /api/notifications/{id}?user_id=...
pub async fn dismiss(
    State(state): State<AppState>,
    Path(id): Path<NotificationId>,
    Query(params): Query<InboxParams>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .notification_service
        .dismiss(id, params.user_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Dismissed".to_string(),
    })))
}
