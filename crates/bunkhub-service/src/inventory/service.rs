//! Building, room, and bed CRUD operations.

use std::sync::Arc;

use tracing::info;

use bunkhub_availability::room_occupancy;
use bunkhub_core::error::AppError;
use bunkhub_core::types::id::{BedId, BuildingId, EventId, RoomId};
use bunkhub_database::repositories::allocation::AllocationRepository;
use bunkhub_database::repositories::bed::BedRepository;
use bunkhub_database::repositories::building::BuildingRepository;
use bunkhub_database::repositories::event::EventRepository;
use bunkhub_database::repositories::room::RoomRepository;
use bunkhub_entity::bed::{Bed, CreateBed, UpdateBed};
use bunkhub_entity::booking::StayPeriod;
use bunkhub_entity::building::{Building, CreateBuilding, UpdateBuilding};
use bunkhub_entity::room::{CreateRoom, Room, RoomWithBeds, UpdateRoom};

use super::structure::{BuildingStructure, RoomStructure};

/// Manages the housing inventory of an event.
#[derive(Debug, Clone)]
pub struct InventoryService {
    event_repo: Arc<EventRepository>,
    building_repo: Arc<BuildingRepository>,
    room_repo: Arc<RoomRepository>,
    bed_repo: Arc<BedRepository>,
    allocation_repo: Arc<AllocationRepository>,
}

impl InventoryService {
    /// Creates a new inventory service.
    pub fn new(
        event_repo: Arc<EventRepository>,
        building_repo: Arc<BuildingRepository>,
        room_repo: Arc<RoomRepository>,
        bed_repo: Arc<BedRepository>,
        allocation_repo: Arc<AllocationRepository>,
    ) -> Self {
        Self {
            event_repo,
            building_repo,
            room_repo,
            bed_repo,
            allocation_repo,
        }
    }

    // Buildings

    /// Creates a building under an event.
    pub async fn create_building(&self, req: CreateBuilding) -> Result<Building, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Building name cannot be empty"));
        }
        self.event_repo
            .find_by_id(req.event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let building = self.building_repo.create(&req).await?;
        info!(building_id = %building.id, name = %building.name, "Building created");
        Ok(building)
    }

    /// Gets a building by ID.
    pub async fn get_building(&self, id: BuildingId) -> Result<Building, AppError> {
        self.building_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Building not found"))
    }

    /// Lists buildings for an event.
    pub async fn list_buildings(&self, event_id: EventId) -> Result<Vec<Building>, AppError> {
        self.building_repo.list_by_event(event_id).await
    }

    /// Updates a building.
    pub async fn update_building(
        &self,
        id: BuildingId,
        req: UpdateBuilding,
    ) -> Result<Building, AppError> {
        let building = self
            .building_repo
            .update(id, &req)
            .await?
            .ok_or_else(|| AppError::not_found("Building not found"))?;
        info!(building_id = %building.id, "Building updated");
        Ok(building)
    }

    /// Deletes a building and its rooms and beds.
    pub async fn delete_building(&self, id: BuildingId) -> Result<(), AppError> {
        if !self.building_repo.delete(id).await? {
            return Err(AppError::not_found("Building not found"));
        }
        info!(building_id = %id, "Building deleted");
        Ok(())
    }

    /// The building's full room and bed layout, with per-room occupancy
    /// when a stay period is given.
    pub async fn building_structure(
        &self,
        id: BuildingId,
        period: Option<StayPeriod>,
    ) -> Result<BuildingStructure, AppError> {
        let building = self.get_building(id).await?;
        let rooms = self.room_repo.list_with_beds(id).await?;

        let occupancies = match period {
            Some(_) => self.allocation_repo.occupancy_for_building(id).await?,
            None => Vec::new(),
        };

        let rooms = rooms
            .into_iter()
            .map(|room| {
                let occupancy =
                    period.map(|p| room_occupancy(&room.beds, &occupancies, None, p));
                RoomStructure { room, occupancy }
            })
            .collect();

        Ok(BuildingStructure { building, rooms })
    }

    // Rooms

    /// Creates a room under a building.
    pub async fn create_room(&self, req: CreateRoom) -> Result<Room, AppError> {
        if req.room_number.trim().is_empty() {
            return Err(AppError::validation("Room number cannot be empty"));
        }
        self.building_repo
            .find_by_id(req.building_id)
            .await?
            .ok_or_else(|| AppError::not_found("Building not found"))?;

        let room = self.room_repo.create(&req).await?;
        info!(room_id = %room.id, room_number = %room.room_number, "Room created");
        Ok(room)
    }

    /// Gets a room together with its beds.
    pub async fn get_room(&self, id: RoomId) -> Result<RoomWithBeds, AppError> {
        self.room_repo
            .find_with_beds(id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))
    }

    /// Lists rooms for a building.
    pub async fn list_rooms(&self, building_id: BuildingId) -> Result<Vec<Room>, AppError> {
        self.room_repo.list_by_building(building_id).await
    }

    /// Updates a room.
    pub async fn update_room(&self, id: RoomId, req: UpdateRoom) -> Result<Room, AppError> {
        let room = self
            .room_repo
            .update(id, &req)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;
        info!(room_id = %room.id, "Room updated");
        Ok(room)
    }

    /// Deletes a room and its beds.
    pub async fn delete_room(&self, id: RoomId) -> Result<(), AppError> {
        if !self.room_repo.delete(id).await? {
            return Err(AppError::not_found("Room not found"));
        }
        info!(room_id = %id, "Room deleted");
        Ok(())
    }

    // Beds

    /// Creates a bed in a room.
    pub async fn create_bed(&self, req: CreateBed) -> Result<Bed, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Bed name cannot be empty"));
        }
        self.room_repo
            .find_by_id(req.room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;

        let bed = self.bed_repo.create(&req).await?;
        info!(bed_id = %bed.id, name = %bed.name, "Bed created");
        Ok(bed)
    }

    /// Gets a bed by ID.
    pub async fn get_bed(&self, id: BedId) -> Result<Bed, AppError> {
        self.bed_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Bed not found"))
    }

    /// Updates a bed.
    pub async fn update_bed(&self, id: BedId, req: UpdateBed) -> Result<Bed, AppError> {
        let bed = self
            .bed_repo
            .update(id, &req)
            .await?
            .ok_or_else(|| AppError::not_found("Bed not found"))?;
        info!(bed_id = %bed.id, "Bed updated");
        Ok(bed)
    }

    /// Deletes a bed.
    pub async fn delete_bed(&self, id: BedId) -> Result<(), AppError> {
        if !self.bed_repo.delete(id).await? {
            return Err(AppError::not_found("Bed not found"));
        }
        info!(bed_id = %id, "Bed deleted");
        Ok(())
    }
}
