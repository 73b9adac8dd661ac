//! Repository implementations, one per aggregate.

pub mod allocation;
pub mod bed;
pub mod booking;
pub mod building;
pub mod event;
pub mod notification;
pub mod room;
pub mod user;
