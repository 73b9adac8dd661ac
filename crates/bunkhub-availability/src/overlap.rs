//! Stay period overlap predicate.

use chrono::NaiveDate;

use bunkhub_entity::booking::StayPeriod;

/// Whether two inclusive date ranges overlap.
///
/// Returns `false` if any input is missing, so callers holding
/// loosely-validated documents degrade to "no overlap" instead of
/// failing. Boundaries are inclusive: two stays sharing a single day
/// (checkout morning / checkin the same day) conflict. That is a
/// deliberate policy, not an off-by-one.
pub fn dates_overlap(
    start_a: Option<NaiveDate>,
    end_a: Option<NaiveDate>,
    start_b: Option<NaiveDate>,
    end_b: Option<NaiveDate>,
) -> bool {
    match (start_a, end_a, start_b, end_b) {
        (Some(start_a), Some(end_a), Some(start_b), Some(end_b)) => {
            start_a <= end_b && end_a >= start_b
        }
        _ => false,
    }
}

/// Whether two stay periods overlap.
///
/// Periods enforce `from <= to` at construction, so this is the
/// infallible form of [`dates_overlap`].
pub fn periods_overlap(a: StayPeriod, b: StayPeriod) -> bool {
    a.from <= b.to && a.to >= b.from
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn p(from: &str, to: &str) -> StayPeriod {
        StayPeriod::new(d(from), d(to)).unwrap()
    }

    #[test]
    fn test_overlapping_ranges() {
        assert!(periods_overlap(
            p("2024-01-10", "2024-01-15"),
            p("2024-01-12", "2024-01-20")
        ));
    }

    #[test]
    fn test_disjoint_ranges() {
        assert!(!periods_overlap(
            p("2024-01-10", "2024-01-15"),
            p("2024-01-16", "2024-01-20")
        ));
    }

    #[test]
    fn test_shared_boundary_day_conflicts() {
        // One stay ends on the 15th, the next begins on the 15th.
        assert!(periods_overlap(
            p("2024-01-10", "2024-01-15"),
            p("2024-01-15", "2024-01-20")
        ));
    }

    #[test]
    fn test_symmetry() {
        let a = p("2024-01-01", "2024-01-05");
        let b = p("2024-01-04", "2024-01-10");
        assert_eq!(periods_overlap(a, b), periods_overlap(b, a));
        let c = p("2024-02-01", "2024-02-03");
        assert_eq!(periods_overlap(a, c), periods_overlap(c, a));
    }

    #[test]
    fn test_period_overlaps_itself() {
        let a = p("2024-01-01", "2024-01-05");
        assert!(periods_overlap(a, a));
    }

    #[test]
    fn test_containment() {
        assert!(periods_overlap(
            p("2024-01-01", "2024-01-31"),
            p("2024-01-10", "2024-01-12")
        ));
    }

    #[test]
    fn test_missing_dates_degrade_to_no_overlap() {
        assert!(!dates_overlap(
            None,
            Some(d("2024-01-15")),
            Some(d("2024-01-10")),
            Some(d("2024-01-20"))
        ));
        assert!(!dates_overlap(None, None, None, None));
    }

    #[test]
    fn test_dates_overlap_matches_periods_overlap() {
        let a = p("2024-01-10", "2024-01-15");
        let b = p("2024-01-12", "2024-01-20");
        assert_eq!(
            dates_overlap(Some(a.from), Some(a.to), Some(b.from), Some(b.to)),
            periods_overlap(a, b)
        );
    }
}
