//! # bunkhub-api
//!
//! HTTP API layer for BunkHub built on Axum.
//!
//! Provides all REST endpoints, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
