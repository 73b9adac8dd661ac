//! Stay period value type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar days during which a person occupies
/// a bed.
///
/// Stay periods carry no time-of-day component: the canonical overlap
/// definition treats each date as a whole day, and two periods sharing
/// a boundary day (checkout morning / checkin the same day) conflict.
/// The invariant `from <= to` is enforced at construction; a period is
/// immutable once created and replaced wholesale on edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayPeriod {
    /// First day of the stay.
    pub from: NaiveDate,
    /// Last day of the stay.
    pub to: NaiveDate,
}

impl StayPeriod {
    /// Create a stay period, rejecting an inverted range.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Option<Self> {
        if from <= to { Some(Self { from, to }) } else { None }
    }

    /// Leniently build a period from optional dates, as persisted
    /// documents may carry missing or inverted ranges.
    pub fn from_optional(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<Self> {
        match (from, to) {
            (Some(from), Some(to)) => Self::new(from, to),
            _ => None,
        }
    }

    /// Leniently parse a period from loosely-validated string fields.
    ///
    /// Returns `None` on missing, unparseable, or inverted input rather
    /// than failing; callers degrade to "no overlap".
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Option<Self> {
        let from = from?.trim().parse::<NaiveDate>().ok()?;
        let to = to?.trim().parse::<NaiveDate>().ok()?;
        Self::new(from, to)
    }

    /// Number of nights, counting a same-day stay as one day.
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        assert!(StayPeriod::new(d("2024-01-15"), d("2024-01-10")).is_none());
        assert!(StayPeriod::new(d("2024-01-10"), d("2024-01-10")).is_some());
    }

    #[test]
    fn test_parse_lenient() {
        assert!(StayPeriod::parse(Some("2024-01-10"), Some("2024-01-15")).is_some());
        assert!(StayPeriod::parse(Some("not-a-date"), Some("2024-01-15")).is_none());
        assert!(StayPeriod::parse(None, Some("2024-01-15")).is_none());
        assert!(StayPeriod::parse(Some("2024-01-15"), Some("2024-01-10")).is_none());
    }

    #[test]
    fn test_days() {
        let p = StayPeriod::new(d("2024-01-10"), d("2024-01-15")).unwrap();
        assert_eq!(p.days(), 6);
        let same_day = StayPeriod::new(d("2024-01-10"), d("2024-01-10")).unwrap();
        assert_eq!(same_day.days(), 1);
    }
}
