//! Event-level reports over the current allocation state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use bunkhub_availability::{RoomOccupancy, room_occupancy};
use bunkhub_core::error::AppError;
use bunkhub_core::types::id::EventId;
use bunkhub_database::repositories::allocation::AllocationRepository;
use bunkhub_database::repositories::booking::BookingRepository;
use bunkhub_database::repositories::building::BuildingRepository;
use bunkhub_database::repositories::event::EventRepository;
use bunkhub_database::repositories::room::RoomRepository;
use bunkhub_entity::booking::{BookingStatus, StayPeriod};
use bunkhub_entity::building::Building;
use bunkhub_entity::room::Room;

/// Occupancy of one room within a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomOccupancyLine {
    /// The room.
    pub room: Room,
    /// Its occupancy over the report period.
    pub occupancy: RoomOccupancy,
}

/// Occupancy of one building within a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingOccupancy {
    /// The building.
    pub building: Building,
    /// Total beds in the building.
    pub capacity: usize,
    /// Beds taken over the report period.
    pub occupied: usize,
    /// Free beds over the report period.
    pub vacant: usize,
    /// Per-room breakdown, in room-number order.
    pub rooms: Vec<RoomOccupancyLine>,
}

/// Occupancy across an event for a stay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyReport {
    /// The event being reported on.
    pub event_id: EventId,
    /// The period the report covers.
    pub period: StayPeriod,
    /// Per-building breakdown.
    pub buildings: Vec<BuildingOccupancy>,
}

/// Booking counts per status for an event.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BookingsReport {
    /// Bookings awaiting a decision.
    pub pending: i64,
    /// Approved bookings.
    pub approved: i64,
    /// Declined bookings.
    pub declined: i64,
    /// All bookings for the event.
    pub total: i64,
}

/// Builds occupancy and booking reports for admins.
#[derive(Debug, Clone)]
pub struct ReportService {
    event_repo: Arc<EventRepository>,
    building_repo: Arc<BuildingRepository>,
    room_repo: Arc<RoomRepository>,
    booking_repo: Arc<BookingRepository>,
    allocation_repo: Arc<AllocationRepository>,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        event_repo: Arc<EventRepository>,
        building_repo: Arc<BuildingRepository>,
        room_repo: Arc<RoomRepository>,
        booking_repo: Arc<BookingRepository>,
        allocation_repo: Arc<AllocationRepository>,
    ) -> Self {
        Self {
            event_repo,
            building_repo,
            room_repo,
            booking_repo,
            allocation_repo,
        }
    }

    /// Occupancy across every building of an event for the given
    /// period. Defaults to the event's own date range when no period is
    /// supplied.
    pub async fn occupancy_report(
        &self,
        event_id: EventId,
        period: Option<StayPeriod>,
    ) -> Result<OccupancyReport, AppError> {
        let event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;
        let period = match period {
            Some(p) => p,
            None => StayPeriod::new(event.starts_on, event.ends_on)
                .ok_or_else(|| AppError::internal("Event has an inverted date range"))?,
        };

        let mut buildings = Vec::new();
        for building in self.building_repo.list_by_event(event_id).await? {
            let rooms = self.room_repo.list_with_beds(building.id).await?;
            let occupancies = self
                .allocation_repo
                .occupancy_for_building(building.id)
                .await?;

            let mut capacity = 0;
            let mut occupied = 0;
            let mut lines = Vec::with_capacity(rooms.len());
            for room in rooms {
                let occ = room_occupancy(&room.beds, &occupancies, None, period);
                capacity += occ.capacity;
                occupied += occ.occupied;
                lines.push(RoomOccupancyLine {
                    room: room.room,
                    occupancy: occ,
                });
            }

            buildings.push(BuildingOccupancy {
                building,
                capacity,
                occupied,
                vacant: capacity.saturating_sub(occupied),
                rooms: lines,
            });
        }

        Ok(OccupancyReport {
            event_id,
            period,
            buildings,
        })
    }

    /// Booking counts per status for an event.
    pub async fn bookings_report(&self, event_id: EventId) -> Result<BookingsReport, AppError> {
        self.event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let mut report = BookingsReport::default();
        for (status, count) in self.booking_repo.count_by_status(event_id).await? {
            match status {
                BookingStatus::Pending => report.pending = count,
                BookingStatus::Approved => report.approved = count,
                BookingStatus::Declined => report.declined = count,
            }
            report.total += count;
        }
        Ok(report)
    }
}
