//! Event repository implementation.

use sqlx::PgPool;

use bunkhub_core::error::{AppError, ErrorKind};
use bunkhub_core::result::AppResult;
use bunkhub_core::types::id::EventId;
use bunkhub_entity::event::{CreateEvent, Event, UpdateEvent};

/// Repository for event CRUD operations.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an event.
    pub async fn create(&self, event: &CreateEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (name, venue, starts_on, ends_on) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&event.name)
        .bind(&event.venue)
        .bind(event.starts_on)
        .bind(event.ends_on)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create event", e))
    }

    /// Find an event by id.
    pub async fn find_by_id(&self, id: EventId) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find event", e))
    }

    /// List all events, most recent first.
    pub async fn list(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY starts_on DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))
    }

    /// Update an event, returning the updated row.
    pub async fn update(&self, id: EventId, update: &UpdateEvent) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET \
                name = COALESCE($2, name), \
                venue = COALESCE($3, venue), \
                starts_on = COALESCE($4, starts_on), \
                ends_on = COALESCE($5, ends_on), \
                is_active = COALESCE($6, is_active), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.venue)
        .bind(update.starts_on)
        .bind(update.ends_on)
        .bind(update.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update event", e))
    }

    /// Delete an event, returning whether a row was removed.
    pub async fn delete(&self, id: EventId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;
        Ok(result.rows_affected() > 0)
    }
}
