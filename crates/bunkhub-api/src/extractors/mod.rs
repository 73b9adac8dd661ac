//! Shared query parameter extractors.

pub mod pagination;
pub mod period;

pub use pagination::PaginationParams;
pub use period::PeriodParams;
