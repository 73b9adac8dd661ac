//! # bunkhub-entity
//!
//! Domain entity models for BunkHub: events, buildings, rooms, beds,
//! bookings (with people and allocations), users, and notifications.
//!
//! Models derive `sqlx::FromRow` for direct hydration from PostgreSQL
//! rows and `serde` traits for the API boundary.

pub mod bed;
pub mod booking;
pub mod building;
pub mod event;
pub mod notification;
pub mod room;
pub mod user;
