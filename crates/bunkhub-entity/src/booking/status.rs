//! Booking status state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a booking.
///
/// Transitions: `pending -> approved` (requires every person to hold a
/// bed allocation), `pending -> declined`, and `approved/declined ->
/// pending` for reconsideration. `approved` and `declined` never
/// transition directly into each other; reconsideration clears any
/// prior allocations since the roster or stay period may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting an admin decision.
    Pending,
    /// Approved with a bed allocated to every person.
    Approved,
    /// Declined by an admin.
    Declined,
}

impl BookingStatus {
    /// Whether the state machine permits moving to `next`.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        match (self, next) {
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Declined) => true,
            (Self::Approved, Self::Pending) | (Self::Declined, Self::Pending) => true,
            _ => false,
        }
    }

    /// Whether moving to `next` is a reconsideration that must clear
    /// existing allocations.
    pub fn clears_allocations_on(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (Self::Approved, Self::Pending) | (Self::Declined, Self::Pending)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = bunkhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "declined" => Ok(Self::Declined),
            _ => Err(bunkhub_core::AppError::validation(format!(
                "Invalid booking status: '{s}'. Expected one of: pending, approved, declined"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Approved));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Declined));
        assert!(BookingStatus::Approved.can_transition_to(BookingStatus::Pending));
        assert!(BookingStatus::Declined.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn test_no_direct_approved_declined_edge() {
        assert!(!BookingStatus::Approved.can_transition_to(BookingStatus::Declined));
        assert!(!BookingStatus::Declined.can_transition_to(BookingStatus::Approved));
    }

    #[test]
    fn test_self_transition_rejected() {
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Pending));
        assert!(!BookingStatus::Approved.can_transition_to(BookingStatus::Approved));
    }

    #[test]
    fn test_reconsideration_clears_allocations() {
        assert!(BookingStatus::Approved.clears_allocations_on(BookingStatus::Pending));
        assert!(BookingStatus::Declined.clears_allocations_on(BookingStatus::Pending));
        assert!(!BookingStatus::Pending.clears_allocations_on(BookingStatus::Approved));
    }
}
