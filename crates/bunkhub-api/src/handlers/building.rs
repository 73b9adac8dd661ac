//! Building handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use validator::Validate;

use bunkhub_core::error::AppError;
use bunkhub_core::types::id::{BuildingId, EventId};
use bunkhub_entity::building::{Building, CreateBuilding, UpdateBuilding};
use bunkhub_service::inventory::BuildingStructure;

use crate::error::ApiError;
use crate::dto::request::{CreateBuildingRequest, UpdateBuildingRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::PeriodParams;
use crate::state::AppState;

/// Query parameters for listing buildings.
#[derive(Debug, Deserialize)]
pub struct ListBuildingsParams {
    /// The event whose buildings to list.
    pub event_id: EventId,
}

/// GET /api/buildings?event_id=...
pub async fn list_buildings(
    State(state): State<AppState>,
    Query(params): Query<ListBuildingsParams>,
) -> Result<Json<ApiResponse<Vec<Building>>>, ApiError> {
    let buildings = state
        .inventory_service
        .list_buildings(params.event_id)
        .await?;
    Ok(Json(ApiResponse::ok(buildings)))
}

/// POST /api/buildings
pub async fn create_building(
    State(state): State<AppState>,
    Json(req): Json<CreateBuildingRequest>,
) -> Result<Json<ApiResponse<Building>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let building = state
        .inventory_service
        .create_building(CreateBuilding {
            event_id: req.event_id,
            name: req.name,
            gender: req.gender,
        })
        .await?;
    Ok(Json(ApiResponse::ok(building)))
}

/// GET /api/buildings/{id}
pub async fn get_building(
    State(state): State<AppState>,
    Path(id): Path<BuildingId>,
) -> Result<Json<ApiResponse<Building>>, ApiError> {
    let building = state.inventory_service.get_building(id).await?;
    Ok(Json(ApiResponse::ok(building)))
}

/// GET /api/buildings/{id}/structure?from=...&to=...
pub async fn get_structure(
    State(state): State<AppState>,
    Path(id): Path<BuildingId>,
    Query(params): Query<PeriodParams>,
) -> Result<Json<ApiResponse<BuildingStructure>>, ApiError> {
    let period = params.period()?;
    let structure = state
        .inventory_service
        .building_structure(id, period)
        .await?;
    Ok(Json(ApiResponse::ok(structure)))
}

/// PUT /api/buildings/{id}
pub async fn update_building(
    State(state): State<AppState>,
    Path(id): Path<BuildingId>,
    Json(req): Json<UpdateBuildingRequest>,
) -> Result<Json<ApiResponse<Building>>, ApiError> {
    let building = state
        .inventory_service
        .update_building(
            id,
            UpdateBuilding {
                name: req.name,
                gender: req.gender,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(building)))
}

/// DELETE /api/buildings/{id}
pub async fn delete_building(
    State(state): State<AppState>,
    Path(id): Path<BuildingId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.inventory_service.delete_building(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Building deleted".to_string(),
    })))
}
