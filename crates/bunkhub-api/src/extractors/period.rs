//! Stay period query parameter extractor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bunkhub_core::error::AppError;
use bunkhub_entity::booking::StayPeriod;

/// `?from=YYYY-MM-DD&to=YYYY-MM-DD` query parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodParams {
    /// First day of the period.
    pub from: Option<NaiveDate>,
    /// Last day of the period.
    pub to: Option<NaiveDate>,
}

impl PeriodParams {
    /// The stay period, if both bounds were given and form a valid
    /// range.
    pub fn period(&self) -> Result<Option<StayPeriod>, AppError> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => StayPeriod::new(from, to)
                .map(Some)
                .ok_or_else(|| AppError::validation("'from' is after 'to'")),
            (None, None) => Ok(None),
            _ => Err(AppError::validation(
                "Both 'from' and 'to' are required when filtering by period",
            )),
        }
    }

    /// The stay period, required.
    pub fn require_period(&self) -> Result<StayPeriod, AppError> {
        self.period()?
            .ok_or_else(|| AppError::validation("'from' and 'to' query parameters are required"))
    }
}
