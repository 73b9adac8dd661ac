//! Event entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bunkhub_core::types::id::EventId;

/// An event for which accommodation is being managed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// Venue description (optional).
    pub venue: Option<String>,
    /// First day of the event.
    pub starts_on: NaiveDate,
    /// Last day of the event.
    pub ends_on: NaiveDate,
    /// Whether bookings are currently accepted.
    pub is_active: bool,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Event name.
    pub name: String,
    /// Venue description (optional).
    pub venue: Option<String>,
    /// First day of the event.
    pub starts_on: NaiveDate,
    /// Last day of the event.
    pub ends_on: NaiveDate,
}

/// Data for updating an existing event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// New event name.
    pub name: Option<String>,
    /// New venue description.
    pub venue: Option<String>,
    /// New first day.
    pub starts_on: Option<NaiveDate>,
    /// New last day.
    pub ends_on: Option<NaiveDate>,
    /// New active flag.
    pub is_active: Option<bool>,
}
