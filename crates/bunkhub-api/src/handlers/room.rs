//! Room handlers, including occupancy and available-bed queries.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use validator::Validate;

use bunkhub_availability::RoomOccupancy;
use bunkhub_core::error::AppError;
use bunkhub_core::types::id::{BookingId, BuildingId, RoomId};
use bunkhub_entity::bed::Bed;
use bunkhub_entity::booking::AllocationDraft;
use bunkhub_entity::room::{CreateRoom, Room, RoomWithBeds, UpdateRoom};

use crate::error::ApiError;
use crate::dto::request::{CreateRoomRequest, UpdateRoomRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::PeriodParams;
use crate::state::AppState;

/// Query parameters for listing rooms.
#[derive(Debug, Deserialize)]
pub struct ListRoomsParams {
    /// The building whose rooms to list.
    pub building_id: BuildingId,
}

/// Query parameters for availability queries against one room.
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    /// First day of the requested stay.
    pub from: Option<chrono::NaiveDate>,
    /// Last day of the requested stay.
    pub to: Option<chrono::NaiveDate>,
    /// The booking being edited, excluded from occupancy.
    pub booking_id: Option<BookingId>,
    /// The person currently being placed (default 0).
    #[serde(default)]
    pub person_index: i32,
    /// Tentative form picks as comma-separated `index:bed_uuid` pairs.
    pub picked: Option<String>,
}

impl AvailabilityParams {
    fn period_params(&self) -> PeriodParams {
        PeriodParams {
            from: self.from,
            to: self.to,
        }
    }

    /// Parse the `picked` parameter into allocation drafts.
    fn tentative(&self) -> Result<Vec<AllocationDraft>, ApiError> {
        let Some(picked) = self.picked.as_deref() else {
            return Ok(Vec::new());
        };

        picked
            .split(',')
            .filter(|pair| !pair.trim().is_empty())
            .map(|pair| {
                let (index, bed) = pair.trim().split_once(':').ok_or_else(|| {
                    AppError::validation("'picked' entries must look like 'index:bed_id'")
                })?;
                let person_index = index
                    .parse::<i32>()
                    .map_err(|_| AppError::validation("Invalid person index in 'picked'"))?;
                let bed_id = bed
                    .parse()
                    .map_err(|_| AppError::validation("Invalid bed id in 'picked'"))?;
                Ok(AllocationDraft {
                    person_index,
                    bed_id: Some(bed_id),
                })
            })
            .collect()
    }
}

/// GET /api/rooms?building_id=...
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(params): Query<ListRoomsParams>,
) -> Result<Json<ApiResponse<Vec<Room>>>, ApiError> {
    let rooms = state.inventory_service.list_rooms(params.building_id).await?;
    Ok(Json(ApiResponse::ok(rooms)))
}

/// POST /api/rooms
pub async fn create_room(
    State(state): State<AppState>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Json<ApiResponse<Room>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let room = state
        .inventory_service
        .create_room(CreateRoom {
            building_id: req.building_id,
            room_number: req.room_number,
            floor: req.floor,
        })
        .await?;
    Ok(Json(ApiResponse::ok(room)))
}

/// GET /api/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<RoomId>,
) -> Result<Json<ApiResponse<RoomWithBeds>>, ApiError> {
    let room = state.inventory_service.get_room(id).await?;
    Ok(Json(ApiResponse::ok(room)))
}

/// GET /api/rooms/{id}/occupancy?from=...&to=...&booking_id=...
pub async fn room_occupancy(
    State(state): State<AppState>,
    Path(id): Path<RoomId>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<ApiResponse<RoomOccupancy>>, ApiError> {
    let period = params.period_params().require_period()?;
    let occupancy = state
        .availability_service
        .room_occupancy(id, period, params.booking_id)
        .await?;
    Ok(Json(ApiResponse::ok(occupancy)))
}

/// GET /api/rooms/{id}/available-beds?from=...&to=...&booking_id=...&person_index=...&picked=...
pub async fn available_beds(
    State(state): State<AppState>,
    Path(id): Path<RoomId>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<ApiResponse<Vec<Bed>>>, ApiError> {
    let period = params.period_params().require_period()?;
    let tentative = params.tentative()?;
    let beds = state
        .availability_service
        .available_beds(id, period, params.booking_id, &tentative, params.person_index)
        .await?;
    Ok(Json(ApiResponse::ok(beds)))
}

/// PUT /api/rooms/{id}
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<RoomId>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<ApiResponse<Room>>, ApiError> {
    let room = state
        .inventory_service
        .update_room(
            id,
            UpdateRoom {
                room_number: req.room_number,
                floor: req.floor,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(room)))
}

/// DELETE /api/rooms/{id}
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<RoomId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.inventory_service.delete_room(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Room deleted".to_string(),
    })))
}
