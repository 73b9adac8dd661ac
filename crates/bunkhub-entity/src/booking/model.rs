//! Booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bunkhub_core::types::id::{BookingId, EventId, UserId};

use super::period::StayPeriod;
use super::person::BookingPerson;
use super::status::BookingStatus;

/// A booking request for accommodation at an event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// The event being booked.
    pub event_id: EventId,
    /// The user who submitted the request.
    pub requester_id: UserId,
    /// Current workflow status.
    pub status: BookingStatus,
    /// Default stay start for all people in the booking.
    pub stay_from: NaiveDate,
    /// Default stay end for all people in the booking.
    pub stay_to: NaiveDate,
    /// Contact phone number (optional).
    pub contact_phone: Option<String>,
    /// Free-form note from the requester.
    pub note: Option<String>,
    /// When the booking was submitted.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// The booking-level stay period, if the stored range is valid.
    pub fn stay_period(&self) -> Option<StayPeriod> {
        StayPeriod::new(self.stay_from, self.stay_to)
    }
}

/// Data required to create a new booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    /// The event being booked.
    pub event_id: EventId,
    /// The requesting user.
    pub requester_id: UserId,
    /// Default stay start.
    pub stay_from: NaiveDate,
    /// Default stay end.
    pub stay_to: NaiveDate,
    /// Contact phone number (optional).
    pub contact_phone: Option<String>,
    /// Free-form note.
    pub note: Option<String>,
    /// People travelling under this booking.
    pub people: Vec<CreateBookingPerson>,
}

/// One person in a booking creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingPerson {
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Declared gender (parsed case-insensitively).
    pub gender: super::person::Gender,
    /// Per-person stay start override.
    pub stay_from: Option<NaiveDate>,
    /// Per-person stay end override.
    pub stay_to: Option<NaiveDate>,
}

/// Data for updating a pending booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBooking {
    /// New default stay start.
    pub stay_from: Option<NaiveDate>,
    /// New default stay end.
    pub stay_to: Option<NaiveDate>,
    /// New contact phone.
    pub contact_phone: Option<String>,
    /// New note.
    pub note: Option<String>,
}

/// A booking together with its roster, as returned to admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingWithPeople {
    /// The booking.
    #[serde(flatten)]
    pub booking: Booking,
    /// People travelling under the booking, ordered by person index.
    pub people: Vec<BookingPerson>,
}
