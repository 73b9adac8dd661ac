//! Bed allocation models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bunkhub_core::types::id::{AllocationId, BedId, BookingId};

use super::period::StayPeriod;
use super::person::Gender;

/// A confirmed assignment of one person (within one booking) to one bed.
///
/// Unique per `(booking_id, person_index)`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Allocation {
    /// Unique allocation identifier.
    pub id: AllocationId,
    /// The owning booking.
    pub booking_id: BookingId,
    /// The person's position within the booking roster.
    pub person_index: i32,
    /// The allocated bed.
    pub bed_id: BedId,
    /// When the allocation was saved.
    pub created_at: DateTime<Utc>,
}

/// A tentative allocation choice made in an in-progress admin form.
///
/// `bed_id` is `None` while the person has no bed selected yet; a
/// booking is fully allocated only once every person's draft carries a
/// bed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationDraft {
    /// The person's position within the booking roster.
    pub person_index: i32,
    /// The selected bed, if any.
    pub bed_id: Option<BedId>,
}

/// A flattened occupancy row: one allocated person with their stay
/// window, as scanned across all bookings for overlap checks.
///
/// Dates are optional because they originate from loosely-validated
/// documents; a row with a missing or inverted range never counts as
/// occupying anything.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BedOccupancy {
    /// The booking holding the allocation.
    pub booking_id: BookingId,
    /// The person's position within that booking.
    pub person_index: i32,
    /// The occupied bed.
    pub bed_id: BedId,
    /// Stay start.
    pub stay_from: Option<NaiveDate>,
    /// Stay end.
    pub stay_to: Option<NaiveDate>,
    /// The occupant's gender.
    pub gender: Gender,
}

impl BedOccupancy {
    /// The occupant's stay period, if the stored range is valid.
    pub fn period(&self) -> Option<StayPeriod> {
        StayPeriod::from_optional(self.stay_from, self.stay_to)
    }
}
