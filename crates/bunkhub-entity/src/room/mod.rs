//! Room entities.

pub mod model;

pub use model::{CreateRoom, Room, RoomWithBeds, UpdateRoom};
