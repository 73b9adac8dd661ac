//! Building entities.

pub mod gender;
pub mod model;

pub use gender::BuildingGender;
pub use model::{Building, CreateBuilding, UpdateBuilding};
