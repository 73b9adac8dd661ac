//! Housing inventory: buildings, rooms, and beds.

pub mod service;
pub mod structure;

pub use service::InventoryService;
pub use structure::{BuildingStructure, RoomStructure};
