//! HTTP request handlers, one module per domain.

pub mod availability;
pub mod bed;
pub mod booking;
pub mod building;
pub mod event;
pub mod health;
pub mod notification;
pub mod report;
pub mod room;
pub mod user;
