//! Building entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bunkhub_core::types::id::{BuildingId, EventId};

use super::gender::BuildingGender;

/// A building holding rooms and beds for one event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Building {
    /// Unique building identifier.
    pub id: BuildingId,
    /// The event this building belongs to.
    pub event_id: EventId,
    /// Building name.
    pub name: String,
    /// Gender category governing eligible occupants.
    pub gender: BuildingGender,
    /// When the building was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBuilding {
    /// The event this building belongs to.
    pub event_id: EventId,
    /// Building name.
    pub name: String,
    /// Gender category.
    pub gender: BuildingGender,
}

/// Data for updating an existing building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBuilding {
    /// New building name.
    pub name: Option<String>,
    /// New gender category.
    pub gender: Option<BuildingGender>,
}
