//! Cross-building availability handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use bunkhub_core::types::id::{BookingId, EventId};
use bunkhub_entity::booking::Gender;
use bunkhub_service::allocation::BuildingAvailability;

use crate::error::ApiError;
use crate::dto::response::ApiResponse;
use crate::extractors::PeriodParams;
use crate::state::AppState;

/// Query parameters for the eligible-buildings lookup.
#[derive(Debug, Deserialize)]
pub struct EligibleBuildingsParams {
    /// The event to search within.
    pub event_id: EventId,
    /// The person's declared gender.
    pub gender: Gender,
    /// First day of the requested stay.
    pub from: Option<chrono::NaiveDate>,
    /// Last day of the requested stay.
    pub to: Option<chrono::NaiveDate>,
    /// The booking being edited, excluded from occupancy.
    pub booking_id: Option<BookingId>,
}

/// GET /api/availability/buildings
pub async fn eligible_buildings(
    State(state): State<AppState>,
    Query(params): Query<EligibleBuildingsParams>,
) -> Result<Json<ApiResponse<Vec<BuildingAvailability>>>, ApiError> {
    let period = PeriodParams {
        from: params.from,
        to: params.to,
    }
    .require_period()?;

    let buildings = state
        .availability_service
        .eligible_buildings(params.event_id, params.gender, period, params.booking_id)
        .await?;
    Ok(Json(ApiResponse::ok(buildings)))
}
