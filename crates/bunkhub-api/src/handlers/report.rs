//! Report handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use bunkhub_core::types::id::EventId;
use bunkhub_service::report::{BookingsReport, OccupancyReport};

use crate::error::ApiError;
use crate::dto::response::ApiResponse;
use crate::extractors::PeriodParams;
use crate::state::AppState;

/// Query parameters for reports.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    /// The event to report on.
    pub event_id: EventId,
    /// First day of the report window.
    pub from: Option<chrono::NaiveDate>,
    /// Last day of the report window.
    pub to: Option<chrono::NaiveDate>,
}

/// GET /api/reports/occupancy?event_id=...&from=...&to=...
pub async fn occupancy_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ApiResponse<OccupancyReport>>, ApiError> {
    let period = PeriodParams {
        from: params.from,
        to: params.to,
    }
    .period()?;

    let report = state
        .report_service
        .occupancy_report(params.event_id, period)
        .await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// GET /api/reports/bookings?event_id=...
pub async fn bookings_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ApiResponse<BookingsReport>>, ApiError> {
    let report = state.report_service.bookings_report(params.event_id).await?;
    Ok(Json(ApiResponse::ok(report)))
}
