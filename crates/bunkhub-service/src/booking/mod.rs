//! Booking submission and decision workflow.

pub mod service;

pub use service::{BookingService, BookingSubmission};
