//! # bunkhub-service
//!
//! Business logic service layer for BunkHub. Each service orchestrates
//! repositories and the availability engine to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod allocation;
pub mod booking;
pub mod event;
pub mod inventory;
pub mod notification;
pub mod report;
pub mod user;

pub use allocation::{AllocationService, AvailabilityService, BuildingAvailability};
pub use booking::{BookingService, BookingSubmission};
pub use event::EventService;
pub use inventory::{BuildingStructure, InventoryService, RoomStructure};
pub use notification::{NotificationRules, NotificationService};
pub use report::{BookingsReport, OccupancyReport, ReportService};
pub use user::UserService;
