//! Building structure view: rooms, beds, and optional occupancy.

use serde::{Deserialize, Serialize};

use bunkhub_availability::RoomOccupancy;
use bunkhub_entity::building::Building;
use bunkhub_entity::room::RoomWithBeds;

/// One room in a building structure view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStructure {
    /// The room with its beds, in room-native order.
    #[serde(flatten)]
    pub room: RoomWithBeds,
    /// Occupancy over the requested period, when one was given.
    pub occupancy: Option<RoomOccupancy>,
}

/// A building with its full room and bed layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingStructure {
    /// The building.
    pub building: Building,
    /// Rooms in room-number order.
    pub rooms: Vec<RoomStructure>,
}
