//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use bunkhub_core::config::AppConfig;
use bunkhub_service::allocation::{AllocationService, AvailabilityService};
use bunkhub_service::booking::BookingService;
use bunkhub_service::event::EventService;
use bunkhub_service::inventory::InventoryService;
use bunkhub_service::notification::NotificationService;
use bunkhub_service::report::ReportService;
use bunkhub_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Event management.
    pub event_service: Arc<EventService>,
    /// Building, room, and bed inventory.
    pub inventory_service: Arc<InventoryService>,
    /// Booking workflow.
    pub booking_service: Arc<BookingService>,
    /// Availability queries.
    pub availability_service: Arc<AvailabilityService>,
    /// Allocation saves.
    pub allocation_service: Arc<AllocationService>,
    /// Notification inboxes.
    pub notification_service: Arc<NotificationService>,
    /// Occupancy and booking reports.
    pub report_service: Arc<ReportService>,
    /// User directory.
    pub user_service: Arc<UserService>,
}
