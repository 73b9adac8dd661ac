//! Bed handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use bunkhub_core::error::AppError;
use bunkhub_core::types::id::BedId;
use bunkhub_entity::bed::{Bed, CreateBed, UpdateBed};

use crate::error::ApiError;
use crate::dto::request::{CreateBedRequest, UpdateBedRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/beds
pub async fn create_bed(
    State(state): State<AppState>,
    Json(req): Json<CreateBedRequest>,
) -> Result<Json<ApiResponse<Bed>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let bed = state
        .inventory_service
        .create_bed(CreateBed {
            room_id: req.room_id,
            name: req.name,
            bed_type: req.bed_type,
            position: req.position,
        })
        .await?;
    Ok(Json(ApiResponse::ok(bed)))
}

/// GET /api/beds/{id}
pub async fn get_bed(
    State(state): State<AppState>,
    Path(id): Path<BedId>,
) -> Result<Json<ApiResponse<Bed>>, ApiError> {
    let bed = state.inventory_service.get_bed(id).await?;
    Ok(Json(ApiResponse::ok(bed)))
}

/// PUT /api/beds/{id}
pub async fn update_bed(
    State(state): State<AppState>,
    Path(id): Path<BedId>,
    Json(req): Json<UpdateBedRequest>,
) -> Result<Json<ApiResponse<Bed>>, ApiError> {
    let bed = state
        .inventory_service
        .update_bed(
            id,
            UpdateBed {
                name: req.name,
                bed_type: req.bed_type,
                position: req.position,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(bed)))
}

/// DELETE /api/beds/{id}
pub async fn delete_bed(
    State(state): State<AppState>,
    Path(id): Path<BedId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.inventory_service.delete_bed(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Bed deleted".to_string(),
    })))
}
