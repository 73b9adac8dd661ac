//! Bed repository implementation.

use sqlx::PgPool;

use bunkhub_core::error::{AppError, ErrorKind};
use bunkhub_core::result::AppResult;
use bunkhub_core::types::id::{BedId, RoomId};
use bunkhub_entity::bed::{Bed, CreateBed, UpdateBed};

/// Repository for bed CRUD operations.
#[derive(Debug, Clone)]
pub struct BedRepository {
    pool: PgPool,
}

impl BedRepository {
    /// Create a new bed repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a bed.
    pub async fn create(&self, bed: &CreateBed) -> AppResult<Bed> {
        sqlx::query_as::<_, Bed>(
            "INSERT INTO beds (room_id, name, bed_type, position) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(bed.room_id)
        .bind(&bed.name)
        .bind(bed.bed_type)
        .bind(bed.position)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create bed", e))
    }

    /// Find a bed by id.
    pub async fn find_by_id(&self, id: BedId) -> AppResult<Option<Bed>> {
        sqlx::query_as::<_, Bed>("SELECT * FROM beds WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find bed", e))
    }

    /// List beds for a room, in room-native order.
    pub async fn list_by_room(&self, room_id: RoomId) -> AppResult<Vec<Bed>> {
        sqlx::query_as::<_, Bed>(
            "SELECT * FROM beds WHERE room_id = $1 ORDER BY position, created_at",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list beds", e))
    }

    /// Update a bed, returning the updated row.
    pub async fn update(&self, id: BedId, update: &UpdateBed) -> AppResult<Option<Bed>> {
        sqlx::query_as::<_, Bed>(
            "UPDATE beds SET \
                name = COALESCE($2, name), \
                bed_type = COALESCE($3, bed_type), \
                position = COALESCE($4, position) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.name)
        .bind(update.bed_type)
        .bind(update.position)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update bed", e))
    }

    /// Delete a bed, returning whether a row was removed.
    pub async fn delete(&self, id: BedId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM beds WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete bed", e))?;
        Ok(result.rows_affected() > 0)
    }
}
