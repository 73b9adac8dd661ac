//! Room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bunkhub_core::types::id::{BuildingId, RoomId};

use crate::bed::Bed;

/// A room within a building.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// The building this room belongs to.
    pub building_id: BuildingId,
    /// Room number as displayed on the door.
    pub room_number: String,
    /// Floor number (optional).
    pub floor: Option<i32>,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
}

/// A room together with its beds, in room-native order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomWithBeds {
    /// The room.
    #[serde(flatten)]
    pub room: Room,
    /// Beds in this room, ordered by position.
    pub beds: Vec<Bed>,
}

impl RoomWithBeds {
    /// Total bed capacity of the room.
    pub fn capacity(&self) -> usize {
        self.beds.len()
    }
}

/// Data required to create a new room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    /// The building this room belongs to.
    pub building_id: BuildingId,
    /// Room number.
    pub room_number: String,
    /// Floor number (optional).
    pub floor: Option<i32>,
}

/// Data for updating an existing room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoom {
    /// New room number.
    pub room_number: Option<String>,
    /// New floor number.
    pub floor: Option<i32>,
}
