//! Saving bed allocations for a booking.

use std::sync::Arc;

use tracing::info;

use bunkhub_core::error::AppError;
use bunkhub_core::types::id::BookingId;
use bunkhub_database::repositories::allocation::AllocationRepository;
use bunkhub_database::repositories::booking::BookingRepository;
use bunkhub_entity::booking::{Allocation, AllocationDraft, BookingStatus};

use crate::notification::NotificationService;

/// Persists allocation drafts for a booking.
#[derive(Debug, Clone)]
pub struct AllocationService {
    booking_repo: Arc<BookingRepository>,
    allocation_repo: Arc<AllocationRepository>,
    notifications: Arc<NotificationService>,
}

impl AllocationService {
    /// Creates a new allocation service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        allocation_repo: Arc<AllocationRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            booking_repo,
            allocation_repo,
            notifications,
        }
    }

    /// The saved allocations for a booking.
    pub async fn get_allocations(&self, booking_id: BookingId) -> Result<Vec<Allocation>, AppError> {
        self.booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;
        self.allocation_repo.find_by_booking(booking_id).await
    }

    /// Replaces a booking's allocations with the given drafts.
    ///
    /// The repository re-validates every picked bed against concurrent
    /// saves inside one transaction; a bed that was taken in the
    /// meantime fails the whole save with a conflict error. Partial
    /// rosters are fine — drafts without a bed are simply not stored.
    pub async fn save_allocations(
        &self,
        booking_id: BookingId,
        drafts: Vec<AllocationDraft>,
    ) -> Result<Vec<Allocation>, AppError> {
        let booking = self
            .booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;
        if booking.status == BookingStatus::Declined {
            return Err(AppError::validation(
                "Declined bookings cannot be allocated; move the booking back to pending first",
            ));
        }

        let people = self.booking_repo.list_people(booking_id).await?;
        for draft in &drafts {
            if !people.iter().any(|p| p.person_index == draft.person_index) {
                return Err(AppError::validation(format!(
                    "No person at index {} in this booking",
                    draft.person_index
                )));
            }
        }
        let mut seen = std::collections::HashSet::new();
        for draft in &drafts {
            if !seen.insert(draft.person_index) {
                return Err(AppError::validation(format!(
                    "Person index {} appears more than once",
                    draft.person_index
                )));
            }
        }

        let saved = self
            .allocation_repo
            .save_for_booking(&booking, &people, &drafts)
            .await?;
        info!(
            booking_id = %booking_id,
            allocated = saved.len(),
            roster = people.len(),
            "Allocations saved"
        );

        self.notifications.allocations_changed(&booking).await?;
        Ok(saved)
    }
}
