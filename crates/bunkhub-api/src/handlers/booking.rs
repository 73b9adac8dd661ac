//! Booking and allocation handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use validator::Validate;

use bunkhub_core::error::AppError;
use bunkhub_core::types::id::{BookingId, EventId, UserId};
use bunkhub_core::types::pagination::PageResponse;
use bunkhub_database::repositories::booking::BookingFilter;
use bunkhub_entity::booking::{
    Allocation, AllocationDraft, Booking, BookingPerson, BookingStatus, BookingWithPeople,
    CreateBooking, CreateBookingPerson, UpdateBooking,
};
use bunkhub_service::booking::BookingSubmission;

use crate::error::ApiError;
use crate::dto::request::{
    ChangeStatusRequest, CreateBookingRequest, SaveAllocationsRequest, UpdateBookingRequest,
};
use crate::dto::response::ApiResponse;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Query parameters for listing bookings.
#[derive(Debug, Deserialize)]
pub struct ListBookingsParams {
    /// Restrict to one event.
    pub event_id: Option<EventId>,
    /// Restrict to one status.
    pub status: Option<String>,
    /// Restrict to one requester.
    pub requester_id: Option<UserId>,
}

/// GET /api/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<ListBookingsParams>,
    Query(page): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Booking>>>, ApiError> {
    let status = params
        .status
        .as_deref()
        .map(str::parse::<BookingStatus>)
        .transpose()?;

    let filter = BookingFilter {
        event_id: params.event_id,
        status,
        requester_id: params.requester_id,
    };
    let page = state
        .booking_service
        .list_bookings(filter, page.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingSubmission>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let people = req
        .people
        .into_iter()
        .map(|p| CreateBookingPerson {
            name: p.name,
            age: p.age,
            gender: p.gender,
            stay_from: p.stay_from,
            stay_to: p.stay_to,
        })
        .collect();

    let submission = state
        .booking_service
        .create_booking(CreateBooking {
            event_id: req.event_id,
            requester_id: req.requester_id,
            stay_from: req.stay_from,
            stay_to: req.stay_to,
            contact_phone: req.contact_phone,
            note: req.note,
            people,
        })
        .await?;
    Ok(Json(ApiResponse::ok(submission)))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<BookingId>,
) -> Result<Json<ApiResponse<BookingWithPeople>>, ApiError> {
    let booking = state.booking_service.get_booking(id).await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// PUT /api/bookings/{id}
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<BookingId>,
    Json(req): Json<UpdateBookingRequest>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let booking = state
        .booking_service
        .update_booking(
            id,
            UpdateBooking {
                stay_from: req.stay_from,
                stay_to: req.stay_to,
                contact_phone: req.contact_phone,
                note: req.note,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// PUT /api/bookings/{id}/status
pub async fn change_status(
    State(state): State<AppState>,
    Path(id): Path<BookingId>,
    Json(req): Json<ChangeStatusRequest>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let next: BookingStatus = req.status.parse()?;
    let booking = state.booking_service.transition(id, next).await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// GET /api/bookings/{id}/people
pub async fn list_people(
    State(state): State<AppState>,
    Path(id): Path<BookingId>,
) -> Result<Json<ApiResponse<Vec<BookingPerson>>>, ApiError> {
    let booking = state.booking_service.get_booking(id).await?;
    Ok(Json(ApiResponse::ok(booking.people)))
}

/// GET /api/bookings/{id}/allocations
pub async fn get_allocations(
    State(state): State<AppState>,
    Path(id): Path<BookingId>,
) -> Result<Json<ApiResponse<Vec<Allocation>>>, ApiError> {
    let allocations = state.allocation_service.get_allocations(id).await?;
    Ok(Json(ApiResponse::ok(allocations)))
}

/// PUT /api/bookings/{id}/allocations
pub async fn save_allocations(
    State(state): State<AppState>,
    Path(id): Path<BookingId>,
    Json(req): Json<SaveAllocationsRequest>,
) -> Result<Json<ApiResponse<Vec<Allocation>>>, ApiError> {
    let drafts: Vec<AllocationDraft> = req
        .allocations
        .into_iter()
        .map(|d| AllocationDraft {
            person_index: d.person_index,
            bed_id: d.bed_id,
        })
        .collect();

    let saved = state.allocation_service.save_allocations(id, drafts).await?;
    Ok(Json(ApiResponse::ok(saved)))
}
