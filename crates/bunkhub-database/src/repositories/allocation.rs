//! Allocation repository: occupancy scans and conflict-checked saves.
//!
//! The availability engine runs over in-memory snapshots, so a save that
//! looked valid in the admin form can still lose a race against a
//! concurrent save. `save_for_booking` closes that window by locking the
//! candidate bed rows and re-running the overlap check inside one
//! transaction.

use sqlx::PgPool;
use uuid::Uuid;

use bunkhub_availability::dates_overlap;
use bunkhub_core::error::{AppError, ErrorKind};
use bunkhub_core::result::AppResult;
use bunkhub_core::types::id::{BookingId, BuildingId, RoomId};
use bunkhub_entity::booking::{Allocation, AllocationDraft, BedOccupancy, Booking, BookingPerson};

/// Repository for bed allocations.
#[derive(Debug, Clone)]
pub struct AllocationRepository {
    pool: PgPool,
}

impl AllocationRepository {
    /// Create a new allocation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The saved allocations for a booking, ordered by person index.
    pub async fn find_by_booking(&self, booking_id: BookingId) -> AppResult<Vec<Allocation>> {
        sqlx::query_as::<_, Allocation>(
            "SELECT * FROM allocations WHERE booking_id = $1 ORDER BY person_index",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list allocations", e))
    }

    /// Occupancy rows for every bed in a room, across all bookings that
    /// have not been declined.
    ///
    /// Each row carries the occupant's effective stay window: the
    /// per-person override when present, else the booking default.
    pub async fn occupancy_for_room(&self, room_id: RoomId) -> AppResult<Vec<BedOccupancy>> {
        sqlx::query_as::<_, BedOccupancy>(
            "SELECT a.booking_id, a.person_index, a.bed_id, \
                    COALESCE(p.stay_from, b.stay_from) AS stay_from, \
                    COALESCE(p.stay_to, b.stay_to) AS stay_to, \
                    p.gender \
             FROM allocations a \
             JOIN bookings b ON b.id = a.booking_id \
             JOIN booking_people p \
               ON p.booking_id = a.booking_id AND p.person_index = a.person_index \
             JOIN beds ON beds.id = a.bed_id \
             WHERE beds.room_id = $1 AND b.status <> 'declined'",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to scan occupancy", e))
    }

    /// Occupancy rows for every bed in a building, across all bookings
    /// that have not been declined.
    pub async fn occupancy_for_building(
        &self,
        building_id: BuildingId,
    ) -> AppResult<Vec<BedOccupancy>> {
        sqlx::query_as::<_, BedOccupancy>(
            "SELECT a.booking_id, a.person_index, a.bed_id, \
                    COALESCE(p.stay_from, b.stay_from) AS stay_from, \
                    COALESCE(p.stay_to, b.stay_to) AS stay_to, \
                    p.gender \
             FROM allocations a \
             JOIN bookings b ON b.id = a.booking_id \
             JOIN booking_people p \
               ON p.booking_id = a.booking_id AND p.person_index = a.person_index \
             JOIN beds ON beds.id = a.bed_id \
             JOIN rooms ON rooms.id = beds.room_id \
             WHERE rooms.building_id = $1 AND b.status <> 'declined'",
        )
        .bind(building_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to scan occupancy", e))
    }

    /// Replace a booking's allocations with the given drafts, verifying
    /// inside one transaction that no selected bed conflicts with a
    /// concurrent save.
    ///
    /// Drafts without a bed are skipped (a partially allocated booking
    /// is a legal intermediate state). A draft whose bed is already
    /// occupied for an overlapping stay fails the whole save with a
    /// conflict error and nothing is written.
    pub async fn save_for_booking(
        &self,
        booking: &Booking,
        people: &[BookingPerson],
        drafts: &[AllocationDraft],
    ) -> AppResult<Vec<Allocation>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM allocations WHERE booking_id = $1")
            .bind(booking.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear allocations", e)
            })?;

        let picked: Vec<&AllocationDraft> =
            drafts.iter().filter(|d| d.bed_id.is_some()).collect();
        if picked.is_empty() {
            tx.commit().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to commit allocations", e)
            })?;
            return Ok(Vec::new());
        }

        let bed_uuids: Vec<Uuid> = picked
            .iter()
            .filter_map(|d| d.bed_id.map(Into::into))
            .collect();

        // Serializes concurrent saves touching the same beds.
        sqlx::query("SELECT id FROM beds WHERE id = ANY($1) FOR UPDATE")
            .bind(&bed_uuids)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock beds", e))?;

        let occupancies = sqlx::query_as::<_, BedOccupancy>(
            "SELECT a.booking_id, a.person_index, a.bed_id, \
                    COALESCE(p.stay_from, b.stay_from) AS stay_from, \
                    COALESCE(p.stay_to, b.stay_to) AS stay_to, \
                    p.gender \
             FROM allocations a \
             JOIN bookings b ON b.id = a.booking_id \
             JOIN booking_people p \
               ON p.booking_id = a.booking_id AND p.person_index = a.person_index \
             WHERE a.bed_id = ANY($1) AND a.booking_id <> $2 AND b.status <> 'declined'",
        )
        .bind(&bed_uuids)
        .bind(booking.id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to scan occupancy", e))?;

        let booking_default = booking.stay_period();
        for draft in &picked {
            let Some(bed_id) = draft.bed_id else { continue };
            let person = people
                .iter()
                .find(|p| p.person_index == draft.person_index)
                .ok_or_else(|| {
                    AppError::validation(format!(
                        "No person at index {} in booking {}",
                        draft.person_index, booking.id
                    ))
                })?;
            let period = person.effective_period(booking_default);
            let (from, to) = match period {
                Some(p) => (Some(p.from), Some(p.to)),
                None => (None, None),
            };

            let taken = occupancies.iter().any(|occ| {
                occ.bed_id == bed_id
                    && dates_overlap(from, to, occ.stay_from, occ.stay_to)
            });
            if taken {
                return Err(AppError::conflict(format!(
                    "Bed {bed_id} was taken by another booking for an overlapping stay"
                )));
            }

            let double_picked = picked.iter().any(|other| {
                other.person_index != draft.person_index && other.bed_id == Some(bed_id)
            });
            if double_picked {
                return Err(AppError::conflict(format!(
                    "Bed {bed_id} is selected for more than one person in this booking"
                )));
            }
        }

        let mut saved = Vec::with_capacity(picked.len());
        for draft in &picked {
            let Some(bed_id) = draft.bed_id else { continue };
            let row = sqlx::query_as::<_, Allocation>(
                "INSERT INTO allocations (booking_id, person_index, bed_id) \
                 VALUES ($1, $2, $3) RETURNING *",
            )
            .bind(booking.id)
            .bind(draft.person_index)
            .bind(bed_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to save allocation", e)
            })?;
            saved.push(row);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit allocations", e)
        })?;

        Ok(saved)
    }

    /// Remove every allocation for a booking, returning how many rows
    /// were cleared. Used when a decision is reconsidered.
    pub async fn delete_for_booking(&self, booking_id: BookingId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM allocations WHERE booking_id = $1")
            .bind(booking_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear allocations", e)
            })?;
        Ok(result.rows_affected())
    }
}
