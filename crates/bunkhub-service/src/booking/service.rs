//! Booking lifecycle: submission, editing, and the decision state
//! machine.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use bunkhub_availability::is_fully_allocated;
use bunkhub_core::error::AppError;
use bunkhub_core::types::id::BookingId;
use bunkhub_core::types::pagination::{PageRequest, PageResponse};
use bunkhub_database::repositories::allocation::AllocationRepository;
use bunkhub_database::repositories::booking::{BookingFilter, BookingRepository};
use bunkhub_database::repositories::event::EventRepository;
use bunkhub_entity::booking::{
    AllocationDraft, Booking, BookingStatus, BookingWithPeople, CreateBooking, MINOR_AGE_LIMIT,
    StayPeriod, UpdateBooking,
};

use crate::notification::NotificationService;

/// A freshly submitted booking plus roster validation flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSubmission {
    /// The stored booking with its roster.
    #[serde(flatten)]
    pub booking: BookingWithPeople,
    /// Indexes of people declared `boy`/`girl` but older than the minor
    /// age limit. Flagged for admin review only; the booking is stored
    /// as submitted.
    pub flagged_people: Vec<i32>,
}

/// Manages bookings and their decision workflow.
#[derive(Debug, Clone)]
pub struct BookingService {
    booking_repo: Arc<BookingRepository>,
    allocation_repo: Arc<AllocationRepository>,
    event_repo: Arc<EventRepository>,
    notifications: Arc<NotificationService>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        allocation_repo: Arc<AllocationRepository>,
        event_repo: Arc<EventRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            booking_repo,
            allocation_repo,
            event_repo,
            notifications,
        }
    }

    /// Submits a new booking with its roster.
    ///
    /// The booking starts out `pending`. People declared as children but
    /// older than the minor age limit are flagged in the response, never
    /// rejected.
    pub async fn create_booking(&self, req: CreateBooking) -> Result<BookingSubmission, AppError> {
        let event = self
            .event_repo
            .find_by_id(req.event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;
        if !event.is_active {
            return Err(AppError::validation("Event is no longer accepting bookings"));
        }

        if req.people.is_empty() {
            return Err(AppError::validation("A booking needs at least one person"));
        }
        StayPeriod::new(req.stay_from, req.stay_to)
            .ok_or_else(|| AppError::validation("Stay start date is after its end date"))?;

        for (index, person) in req.people.iter().enumerate() {
            if person.name.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "Person {index} has an empty name"
                )));
            }
            if person.age < 0 {
                return Err(AppError::validation(format!(
                    "Person {index} has a negative age"
                )));
            }
            if let (Some(from), Some(to)) = (person.stay_from, person.stay_to) {
                StayPeriod::new(from, to).ok_or_else(|| {
                    AppError::validation(format!("Person {index} has an inverted stay range"))
                })?;
            }
        }

        let stored = self.booking_repo.create(&req).await?;

        let flagged_people: Vec<i32> = stored
            .people
            .iter()
            .filter(|p| p.flagged_overage())
            .map(|p| p.person_index)
            .collect();
        if !flagged_people.is_empty() {
            warn!(
                booking_id = %stored.booking.id,
                ?flagged_people,
                limit = MINOR_AGE_LIMIT,
                "Booking has overage child entries"
            );
        }

        info!(
            booking_id = %stored.booking.id,
            event_id = %stored.booking.event_id,
            people = stored.people.len(),
            "Booking submitted"
        );
        self.notifications.booking_submitted(&stored.booking).await?;

        Ok(BookingSubmission {
            booking: stored,
            flagged_people,
        })
    }

    /// Gets a booking with its roster.
    pub async fn get_booking(&self, id: BookingId) -> Result<BookingWithPeople, AppError> {
        self.booking_repo
            .find_with_people(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))
    }

    /// Lists bookings matching the filter.
    pub async fn list_bookings(
        &self,
        filter: BookingFilter,
        page: PageRequest,
    ) -> Result<PageResponse<Booking>, AppError> {
        self.booking_repo.list(&filter, &page).await
    }

    /// Updates a booking's editable fields. Only pending bookings may be
    /// edited; decided bookings must be reconsidered first.
    pub async fn update_booking(
        &self,
        id: BookingId,
        req: UpdateBooking,
    ) -> Result<Booking, AppError> {
        let booking = self.require_booking(id).await?;
        if booking.status != BookingStatus::Pending {
            return Err(AppError::validation(
                "Only pending bookings can be edited; move the booking back to pending first",
            ));
        }
        if let (Some(from), Some(to)) = (
            req.stay_from.or(Some(booking.stay_from)),
            req.stay_to.or(Some(booking.stay_to)),
        ) {
            StayPeriod::new(from, to)
                .ok_or_else(|| AppError::validation("Stay start date is after its end date"))?;
        }

        let updated = self
            .booking_repo
            .update(id, &req)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;
        info!(booking_id = %id, "Booking updated");
        Ok(updated)
    }

    /// Moves a booking to a new status, enforcing the state machine.
    ///
    /// Approval requires every person in the roster to hold a bed.
    /// Reconsideration (back to pending) clears existing allocations.
    pub async fn transition(
        &self,
        id: BookingId,
        next: BookingStatus,
    ) -> Result<Booking, AppError> {
        let booking = self.require_booking(id).await?;
        if !booking.status.can_transition_to(next) {
            return Err(AppError::validation(format!(
                "Cannot move a {} booking to {next}",
                booking.status
            )));
        }

        if next == BookingStatus::Approved {
            let people = self.booking_repo.list_people(id).await?;
            let drafts: Vec<AllocationDraft> = self
                .allocation_repo
                .find_by_booking(id)
                .await?
                .iter()
                .map(|a| AllocationDraft {
                    person_index: a.person_index,
                    bed_id: Some(a.bed_id),
                })
                .collect();
            if !is_fully_allocated(people.len(), &drafts) {
                return Err(AppError::validation(
                    "Every person needs a bed before the booking can be approved",
                ));
            }
        }

        if booking.status.clears_allocations_on(next) {
            let cleared = self.allocation_repo.delete_for_booking(id).await?;
            if cleared > 0 {
                info!(booking_id = %id, cleared, "Cleared allocations on reconsideration");
            }
        }

        let updated = self
            .booking_repo
            .update_status(id, next)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;
        info!(booking_id = %id, from = %booking.status, to = %next, "Booking status changed");

        self.notifications.booking_decided(&updated).await?;
        Ok(updated)
    }

    async fn require_booking(&self, id: BookingId) -> Result<Booking, AppError> {
        self.booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))
    }
}
