//! Room repository implementation.

use sqlx::PgPool;

use bunkhub_core::error::{AppError, ErrorKind};
use bunkhub_core::result::AppResult;
use bunkhub_core::types::id::{BuildingId, RoomId};
use bunkhub_entity::bed::Bed;
use bunkhub_entity::room::{CreateRoom, Room, RoomWithBeds, UpdateRoom};

/// Repository for room CRUD operations.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a room.
    pub async fn create(&self, room: &CreateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (building_id, room_number, floor) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(room.building_id)
        .bind(&room.room_number)
        .bind(room.floor)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create room", e))
    }

    /// Find a room by id.
    pub async fn find_by_id(&self, id: RoomId) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }

    /// Find a room together with its beds, in room-native bed order.
    pub async fn find_with_beds(&self, id: RoomId) -> AppResult<Option<RoomWithBeds>> {
        let Some(room) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let beds = sqlx::query_as::<_, Bed>(
            "SELECT * FROM beds WHERE room_id = $1 ORDER BY position, created_at",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list beds", e))?;

        Ok(Some(RoomWithBeds { room, beds }))
    }

    /// List rooms for a building, in room-number order.
    pub async fn list_by_building(&self, building_id: BuildingId) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE building_id = $1 ORDER BY room_number",
        )
        .bind(building_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))
    }

    /// List rooms with beds for a building, in room-number order.
    pub async fn list_with_beds(&self, building_id: BuildingId) -> AppResult<Vec<RoomWithBeds>> {
        let rooms = self.list_by_building(building_id).await?;

        let beds = sqlx::query_as::<_, Bed>(
            "SELECT beds.* FROM beds \
             JOIN rooms ON rooms.id = beds.room_id \
             WHERE rooms.building_id = $1 \
             ORDER BY beds.position, beds.created_at",
        )
        .bind(building_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list beds", e))?;

        Ok(rooms
            .into_iter()
            .map(|room| {
                let room_beds = beds.iter().filter(|b| b.room_id == room.id).cloned().collect();
                RoomWithBeds {
                    room,
                    beds: room_beds,
                }
            })
            .collect())
    }

    /// Update a room, returning the updated row.
    pub async fn update(&self, id: RoomId, update: &UpdateRoom) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET \
                room_number = COALESCE($2, room_number), \
                floor = COALESCE($3, floor) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.room_number)
        .bind(update.floor)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update room", e))
    }

    /// Delete a room, returning whether a row was removed.
    pub async fn delete(&self, id: RoomId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete room", e))?;
        Ok(result.rows_affected() > 0)
    }
}
