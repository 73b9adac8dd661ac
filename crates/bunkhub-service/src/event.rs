//! Event management operations.

use std::sync::Arc;

use tracing::info;

use bunkhub_core::error::AppError;
use bunkhub_core::types::id::EventId;
use bunkhub_database::repositories::event::EventRepository;
use bunkhub_entity::event::{CreateEvent, Event, UpdateEvent};

/// Manages accommodation events.
#[derive(Debug, Clone)]
pub struct EventService {
    event_repo: Arc<EventRepository>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(event_repo: Arc<EventRepository>) -> Self {
        Self { event_repo }
    }

    /// Creates an event.
    pub async fn create_event(&self, req: CreateEvent) -> Result<Event, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Event name cannot be empty"));
        }
        if req.starts_on > req.ends_on {
            return Err(AppError::validation("Event start date is after its end date"));
        }

        let event = self.event_repo.create(&req).await?;
        info!(event_id = %event.id, name = %event.name, "Event created");
        Ok(event)
    }

    /// Gets an event by ID.
    pub async fn get_event(&self, id: EventId) -> Result<Event, AppError> {
        self.event_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))
    }

    /// Lists all events, most recent first.
    pub async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        self.event_repo.list().await
    }

    /// Updates an event.
    pub async fn update_event(&self, id: EventId, req: UpdateEvent) -> Result<Event, AppError> {
        if let (Some(starts_on), Some(ends_on)) = (req.starts_on, req.ends_on) {
            if starts_on > ends_on {
                return Err(AppError::validation("Event start date is after its end date"));
            }
        }

        let event = self
            .event_repo
            .update(id, &req)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;
        info!(event_id = %event.id, "Event updated");
        Ok(event)
    }

    /// Deletes an event and everything housed under it.
    pub async fn delete_event(&self, id: EventId) -> Result<(), AppError> {
        if !self.event_repo.delete(id).await? {
            return Err(AppError::not_found("Event not found"));
        }
        info!(event_id = %id, "Event deleted");
        Ok(())
    }
}
