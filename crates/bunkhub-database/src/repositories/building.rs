//! Building repository implementation.

use sqlx::PgPool;

use bunkhub_core::error::{AppError, ErrorKind};
use bunkhub_core::result::AppResult;
use bunkhub_core::types::id::{BuildingId, EventId};
use bunkhub_entity::building::{Building, CreateBuilding, UpdateBuilding};

/// Repository for building CRUD operations.
#[derive(Debug, Clone)]
pub struct BuildingRepository {
    pool: PgPool,
}

impl BuildingRepository {
    /// Create a new building repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a building.
    pub async fn create(&self, building: &CreateBuilding) -> AppResult<Building> {
        sqlx::query_as::<_, Building>(
            "INSERT INTO buildings (event_id, name, gender) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(building.event_id)
        .bind(&building.name)
        .bind(building.gender)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create building", e))
    }

    /// Find a building by id.
    pub async fn find_by_id(&self, id: BuildingId) -> AppResult<Option<Building>> {
        sqlx::query_as::<_, Building>("SELECT * FROM buildings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find building", e))
    }

    /// List buildings for an event, in name order.
    pub async fn list_by_event(&self, event_id: EventId) -> AppResult<Vec<Building>> {
        sqlx::query_as::<_, Building>(
            "SELECT * FROM buildings WHERE event_id = $1 ORDER BY name",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list buildings", e))
    }

    /// Update a building, returning the updated row.
    pub async fn update(
        &self,
        id: BuildingId,
        update: &UpdateBuilding,
    ) -> AppResult<Option<Building>> {
        sqlx::query_as::<_, Building>(
            "UPDATE buildings SET \
                name = COALESCE($2, name), \
                gender = COALESCE($3, gender) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.name)
        .bind(update.gender)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update building", e))
    }

    /// Delete a building, returning whether a row was removed.
    pub async fn delete(&self, id: BuildingId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM buildings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete building", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
