//! Reporting: occupancy and booking summaries per event.

pub mod service;

pub use service::{BookingsReport, BuildingOccupancy, OccupancyReport, ReportService};
