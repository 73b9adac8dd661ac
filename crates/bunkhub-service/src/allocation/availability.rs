//! Availability queries: free beds, room occupancy, and eligible
//! buildings.
//!
//! These compose the pure availability engine with fresh database
//! snapshots. Answers are advisory; the conflict-checked save in
//! [`super::AllocationService`] is what actually holds.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use bunkhub_availability::{
    RoomOccupancy, available_beds, is_gender_eligible, room_occupancy,
};
use bunkhub_core::error::AppError;
use bunkhub_core::types::id::{BookingId, EventId, RoomId};
use bunkhub_database::repositories::allocation::AllocationRepository;
use bunkhub_database::repositories::building::BuildingRepository;
use bunkhub_database::repositories::room::RoomRepository;
use bunkhub_entity::bed::Bed;
use bunkhub_entity::booking::{AllocationDraft, Gender, StayPeriod};
use bunkhub_entity::building::Building;

/// A building eligible for a person, with its total capacity over a
/// stay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingAvailability {
    /// The building.
    pub building: Building,
    /// Total beds in the building.
    pub capacity: usize,
    /// Beds taken over the requested period.
    pub occupied: usize,
    /// Free beds over the requested period.
    pub vacant: usize,
}

/// Answers availability questions against the current allocation state.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    building_repo: Arc<BuildingRepository>,
    room_repo: Arc<RoomRepository>,
    allocation_repo: Arc<AllocationRepository>,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(
        building_repo: Arc<BuildingRepository>,
        room_repo: Arc<RoomRepository>,
        allocation_repo: Arc<AllocationRepository>,
    ) -> Self {
        Self {
            building_repo,
            room_repo,
            allocation_repo,
        }
    }

    /// Beds in a room that are free for the requested period.
    ///
    /// `exclude_booking` is the booking being edited; `tentative` holds
    /// the in-progress form picks for that booking and `person_index`
    /// identifies the person currently being placed.
    pub async fn available_beds(
        &self,
        room_id: RoomId,
        period: StayPeriod,
        exclude_booking: Option<BookingId>,
        tentative: &[AllocationDraft],
        person_index: i32,
    ) -> Result<Vec<Bed>, AppError> {
        let room = self
            .room_repo
            .find_with_beds(room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;
        let occupancies = self.allocation_repo.occupancy_for_room(room_id).await?;

        Ok(available_beds(
            &room.beds,
            &occupancies,
            exclude_booking,
            period,
            tentative,
            person_index,
        ))
    }

    /// Capacity summary for a room over the requested period.
    pub async fn room_occupancy(
        &self,
        room_id: RoomId,
        period: StayPeriod,
        exclude_booking: Option<BookingId>,
    ) -> Result<RoomOccupancy, AppError> {
        let room = self
            .room_repo
            .find_with_beds(room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;
        let occupancies = self.allocation_repo.occupancy_for_room(room_id).await?;

        Ok(room_occupancy(
            &room.beds,
            &occupancies,
            exclude_booking,
            period,
        ))
    }

    /// Buildings in an event that may house a person of the given
    /// gender, each with its capacity over the requested period.
    ///
    /// Building order is preserved; ineligible buildings are omitted
    /// rather than flagged.
    pub async fn eligible_buildings(
        &self,
        event_id: EventId,
        person_gender: Gender,
        period: StayPeriod,
        exclude_booking: Option<BookingId>,
    ) -> Result<Vec<BuildingAvailability>, AppError> {
        let buildings = self.building_repo.list_by_event(event_id).await?;

        let mut result = Vec::new();
        for building in buildings {
            if !is_gender_eligible(building.gender, person_gender) {
                continue;
            }

            let rooms = self.room_repo.list_with_beds(building.id).await?;
            let occupancies = self
                .allocation_repo
                .occupancy_for_building(building.id)
                .await?;

            let mut capacity = 0;
            let mut occupied = 0;
            for room in &rooms {
                let occ = room_occupancy(&room.beds, &occupancies, exclude_booking, period);
                capacity += occ.capacity;
                occupied += occ.occupied;
            }

            result.push(BuildingAvailability {
                building,
                capacity,
                occupied,
                vacant: capacity.saturating_sub(occupied),
            });
        }

        Ok(result)
    }
}
