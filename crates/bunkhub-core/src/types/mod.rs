//! Shared value types.

pub mod id;
pub mod pagination;
