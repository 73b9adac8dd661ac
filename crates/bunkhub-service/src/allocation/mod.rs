//! Bed allocation and availability queries.

pub mod availability;
pub mod service;

pub use availability::{AvailabilityService, BuildingAvailability};
pub use service::AllocationService;
