//! In-app notifications for the booking workflow.

pub mod rules;
pub mod service;

pub use rules::NotificationRules;
pub use service::NotificationService;
