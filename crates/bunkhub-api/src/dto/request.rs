//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use bunkhub_core::types::id::{BedId, BuildingId, EventId, RoomId, UserId};
use bunkhub_entity::bed::BedType;
use bunkhub_entity::building::BuildingGender;
use bunkhub_entity::booking::Gender;
use bunkhub_entity::user::UserRole;

/// Create event request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// Event name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Venue description.
    pub venue: Option<String>,
    /// First day of the event.
    pub starts_on: NaiveDate,
    /// Last day of the event.
    pub ends_on: NaiveDate,
}

/// Update event request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    /// New event name.
    pub name: Option<String>,
    /// New venue description.
    pub venue: Option<String>,
    /// New first day.
    pub starts_on: Option<NaiveDate>,
    /// New last day.
    pub ends_on: Option<NaiveDate>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// Create building request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBuildingRequest {
    /// The event this building belongs to.
    pub event_id: EventId,
    /// Building name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Gender category.
    pub gender: BuildingGender,
}

/// Update building request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBuildingRequest {
    /// New building name.
    pub name: Option<String>,
    /// New gender category.
    pub gender: Option<BuildingGender>,
}

/// Create room request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoomRequest {
    /// The building this room belongs to.
    pub building_id: BuildingId,
    /// Room number.
    #[validate(length(min = 1, max = 50))]
    pub room_number: String,
    /// Floor number.
    pub floor: Option<i32>,
}

/// Update room request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    /// New room number.
    pub room_number: Option<String>,
    /// New floor number.
    pub floor: Option<i32>,
}

/// Create bed request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBedRequest {
    /// The room this bed belongs to.
    pub room_id: RoomId,
    /// Bed label.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Physical bed type.
    pub bed_type: BedType,
    /// Ordering position within the room.
    #[serde(default)]
    pub position: i32,
}

/// Update bed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBedRequest {
    /// New bed label.
    pub name: Option<String>,
    /// New bed type.
    pub bed_type: Option<BedType>,
    /// New ordering position.
    pub position: Option<i32>,
}

/// One person in a booking submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingPersonRequest {
    /// Full name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Age in years.
    #[validate(range(min = 0, max = 130))]
    pub age: i32,
    /// Declared gender.
    pub gender: Gender,
    /// Per-person stay start override.
    pub stay_from: Option<NaiveDate>,
    /// Per-person stay end override.
    pub stay_to: Option<NaiveDate>,
}

/// Create booking request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// The event being booked.
    pub event_id: EventId,
    /// The requesting user.
    pub requester_id: UserId,
    /// Default stay start.
    pub stay_from: NaiveDate,
    /// Default stay end.
    pub stay_to: NaiveDate,
    /// Contact phone number.
    pub contact_phone: Option<String>,
    /// Free-form note.
    pub note: Option<String>,
    /// People travelling under this booking.
    #[validate(length(min = 1, message = "A booking needs at least one person"))]
    #[validate(nested)]
    pub people: Vec<BookingPersonRequest>,
}

/// Update booking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingRequest {
    /// New default stay start.
    pub stay_from: Option<NaiveDate>,
    /// New default stay end.
    pub stay_to: Option<NaiveDate>,
    /// New contact phone.
    pub contact_phone: Option<String>,
    /// New note.
    pub note: Option<String>,
}

/// Booking status change request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeStatusRequest {
    /// Target status: pending, approved, or declined.
    pub status: String,
}

/// One allocation draft in a bulk save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationDraftRequest {
    /// The person's position within the booking roster.
    pub person_index: i32,
    /// The selected bed, if any.
    pub bed_id: Option<BedId>,
}

/// Bulk allocation save request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveAllocationsRequest {
    /// One draft per person being placed.
    pub allocations: Vec<AllocationDraftRequest>,
}

/// Create user request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Unique login name.
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Workflow role.
    pub role: UserRole,
}
