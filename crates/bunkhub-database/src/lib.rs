//! # bunkhub-database
//!
//! PostgreSQL access for BunkHub: connection pool management, embedded
//! migrations, and repository implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
