//! Full-allocation guard for the approval transition.

use bunkhub_entity::booking::AllocationDraft;

/// Whether every person in the booking holds a bed.
///
/// Gates the `pending -> approved` transition: the draft set must
/// cover the whole roster and every entry must carry a bed id.
pub fn is_fully_allocated(people_count: usize, drafts: &[AllocationDraft]) -> bool {
    drafts.len() == people_count && drafts.iter().all(|d| d.bed_id.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bunkhub_core::types::id::BedId;

    fn draft(person_index: i32, with_bed: bool) -> AllocationDraft {
        AllocationDraft {
            person_index,
            bed_id: with_bed.then(BedId::new),
        }
    }

    #[test]
    fn test_fully_allocated() {
        let drafts = vec![draft(0, true), draft(1, true)];
        assert!(is_fully_allocated(2, &drafts));
    }

    #[test]
    fn test_short_draft_set_is_not_full() {
        let drafts = vec![draft(0, true)];
        assert!(!is_fully_allocated(2, &drafts));
    }

    #[test]
    fn test_missing_bed_is_not_full() {
        let drafts = vec![draft(0, true), draft(1, false)];
        assert!(!is_fully_allocated(2, &drafts));
    }

    #[test]
    fn test_empty_roster_is_trivially_full() {
        assert!(is_fully_allocated(0, &[]));
    }

    #[test]
    fn test_excess_drafts_are_not_full() {
        let drafts = vec![draft(0, true), draft(1, true), draft(2, true)];
        assert!(!is_fully_allocated(2, &drafts));
    }
}
