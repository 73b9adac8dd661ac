//! Event handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use bunkhub_core::error::AppError;
use bunkhub_core::types::id::EventId;
use bunkhub_entity::event::{CreateEvent, Event, UpdateEvent};

use crate::error::ApiError;
use crate::dto::request::{CreateEventRequest, UpdateEventRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Event>>>, ApiError> {
    let events = state.event_service.list_events().await?;
    Ok(Json(ApiResponse::ok(events)))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let event = state
        .event_service
        .create_event(CreateEvent {
            name: req.name,
            venue: req.venue,
            starts_on: req.starts_on,
            ends_on: req.ends_on,
        })
        .await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    let event = state.event_service.get_event(id).await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// PUT /api/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    let event = state
        .event_service
        .update_event(
            id,
            UpdateEvent {
                name: req.name,
                venue: req.venue,
                starts_on: req.starts_on,
                ends_on: req.ends_on,
                is_active: req.is_active,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.event_service.delete_event(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Event deleted".to_string(),
    })))
}
