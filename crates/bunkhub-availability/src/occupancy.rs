//! Room occupancy and available-bed queries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use bunkhub_core::types::id::{BedId, BookingId};
use bunkhub_entity::bed::Bed;
use bunkhub_entity::booking::{AllocationDraft, BedOccupancy, StayPeriod};

use crate::overlap::periods_overlap;

/// Capacity summary for one room over a stay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomOccupancy {
    /// Number of beds in the room.
    pub capacity: usize,
    /// People whose stay overlaps the requested period.
    pub occupied: usize,
    /// Free beds, clamped at zero.
    pub vacant: usize,
}

/// Count how many beds of a room are taken over the requested period.
///
/// `exclude_booking` is the booking currently being edited; its own
/// rows never count against it. Occupancy rows with a missing or
/// inverted stay range never count as occupying anything. A room with
/// zero beds yields capacity 0, and `vacant` never underflows even if
/// bad data over-allocates a room.
pub fn room_occupancy(
    beds: &[Bed],
    occupancies: &[BedOccupancy],
    exclude_booking: Option<BookingId>,
    period: StayPeriod,
) -> RoomOccupancy {
    let capacity = beds.len();
    let room_beds: HashSet<BedId> = beds.iter().map(|b| b.id).collect();

    let occupied = occupancies
        .iter()
        .filter(|occ| Some(occ.booking_id) != exclude_booking)
        .filter(|occ| room_beds.contains(&occ.bed_id))
        .filter(|occ| occ.period().is_some_and(|p| periods_overlap(p, period)))
        .count();

    RoomOccupancy {
        capacity,
        occupied,
        vacant: capacity.saturating_sub(occupied),
    }
}

/// Beds in a room that are free for the requested period.
///
/// Two exclusion layers are applied:
///
/// 1. **Globally occupied** — beds held by any person in another
///    booking whose stay overlaps the requested period (the edited
///    booking itself is excluded by id, so its saved allocations do
///    not conflict with their own replacement).
/// 2. **Tentatively occupied** — beds picked in the in-progress
///    allocation form for *other* people in the same booking, so two
///    people being allocated simultaneously cannot be pointed at the
///    same bed. The person currently being placed is identified by
///    `exclude_person` and their own pick is not held against them.
///
/// Room-native bed ordering is preserved.
pub fn available_beds(
    beds: &[Bed],
    occupancies: &[BedOccupancy],
    exclude_booking: Option<BookingId>,
    period: StayPeriod,
    tentative: &[AllocationDraft],
    exclude_person: i32,
) -> Vec<Bed> {
    let globally_occupied: HashSet<BedId> = occupancies
        .iter()
        .filter(|occ| Some(occ.booking_id) != exclude_booking)
        .filter(|occ| occ.period().is_some_and(|p| periods_overlap(p, period)))
        .map(|occ| occ.bed_id)
        .collect();

    let tentatively_occupied: HashSet<BedId> = tentative
        .iter()
        .filter(|draft| draft.person_index != exclude_person)
        .filter_map(|draft| draft.bed_id)
        .collect();

    beds.iter()
        .filter(|bed| !globally_occupied.contains(&bed.id))
        .filter(|bed| !tentatively_occupied.contains(&bed.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bunkhub_core::types::id::RoomId;
    use bunkhub_entity::bed::BedType;
    use bunkhub_entity::booking::Gender;
    use chrono::{NaiveDate, Utc};

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn p(from: &str, to: &str) -> StayPeriod {
        StayPeriod::new(d(from), d(to)).unwrap()
    }

    fn bed(room_id: RoomId, name: &str, position: i32) -> Bed {
        Bed {
            id: BedId::new(),
            room_id,
            name: name.to_string(),
            bed_type: BedType::Single,
            position,
            created_at: Utc::now(),
        }
    }

    fn occupancy(booking_id: BookingId, bed_id: BedId, from: &str, to: &str) -> BedOccupancy {
        BedOccupancy {
            booking_id,
            person_index: 0,
            bed_id,
            stay_from: Some(d(from)),
            stay_to: Some(d(to)),
            gender: Gender::Male,
        }
    }

    #[test]
    fn test_empty_room_has_zero_capacity() {
        let occ = room_occupancy(&[], &[], None, p("2024-01-01", "2024-01-05"));
        assert_eq!(occ.capacity, 0);
        assert_eq!(occ.vacant, 0);
    }

    #[test]
    fn test_occupied_counts_only_overlapping_people() {
        let room_id = RoomId::new();
        let beds = vec![bed(room_id, "A", 0), bed(room_id, "B", 1)];
        let other = BookingId::new();
        let occupancies = vec![
            occupancy(other, beds[0].id, "2024-01-10", "2024-01-15"),
            occupancy(other, beds[1].id, "2024-02-01", "2024-02-05"),
        ];

        let occ = room_occupancy(&beds, &occupancies, None, p("2024-01-12", "2024-01-20"));
        assert_eq!(occ.capacity, 2);
        assert_eq!(occ.occupied, 1);
        assert_eq!(occ.vacant, 1);
    }

    #[test]
    fn test_own_booking_excluded_from_occupancy() {
        let room_id = RoomId::new();
        let beds = vec![bed(room_id, "A", 0)];
        let mine = BookingId::new();
        let occupancies = vec![occupancy(mine, beds[0].id, "2024-01-10", "2024-01-15")];

        let occ = room_occupancy(&beds, &occupancies, Some(mine), p("2024-01-10", "2024-01-15"));
        assert_eq!(occ.occupied, 0);
        assert_eq!(occ.vacant, 1);
    }

    #[test]
    fn test_vacant_clamped_at_zero() {
        let room_id = RoomId::new();
        let beds = vec![bed(room_id, "A", 0)];
        let b1 = BookingId::new();
        let b2 = BookingId::new();
        // Bad data: the same bed double-booked.
        let occupancies = vec![
            occupancy(b1, beds[0].id, "2024-01-10", "2024-01-15"),
            occupancy(b2, beds[0].id, "2024-01-12", "2024-01-18"),
        ];

        let occ = room_occupancy(&beds, &occupancies, None, p("2024-01-12", "2024-01-14"));
        assert_eq!(occ.occupied, 2);
        assert_eq!(occ.vacant, 0);
    }

    #[test]
    fn test_invalid_occupancy_range_never_occupies() {
        let room_id = RoomId::new();
        let beds = vec![bed(room_id, "A", 0)];
        let occupancies = vec![BedOccupancy {
            booking_id: BookingId::new(),
            person_index: 0,
            bed_id: beds[0].id,
            stay_from: None,
            stay_to: Some(d("2024-01-15")),
            gender: Gender::Female,
        }];

        let occ = room_occupancy(&beds, &occupancies, None, p("2024-01-10", "2024-01-20"));
        assert_eq!(occ.occupied, 0);
        assert_eq!(occ.vacant, 1);
    }

    #[test]
    fn test_available_beds_excludes_occupied_and_preserves_order() {
        let room_id = RoomId::new();
        let beds = vec![bed(room_id, "A", 0), bed(room_id, "B", 1), bed(room_id, "C", 2)];
        let other = BookingId::new();
        let occupancies = vec![occupancy(other, beds[1].id, "2024-01-10", "2024-01-15")];

        let free = available_beds(
            &beds,
            &occupancies,
            None,
            p("2024-01-12", "2024-01-20"),
            &[],
            0,
        );
        let names: Vec<&str> = free.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_tentative_picks_exclude_other_people() {
        let room_id = RoomId::new();
        let beds = vec![bed(room_id, "A", 0), bed(room_id, "B", 1)];
        // Person 0 has tentatively picked bed A; person 1 is being placed.
        let tentative = vec![
            AllocationDraft {
                person_index: 0,
                bed_id: Some(beds[0].id),
            },
            AllocationDraft {
                person_index: 1,
                bed_id: Some(beds[1].id),
            },
        ];

        let free = available_beds(&beds, &[], None, p("2024-01-10", "2024-01-15"), &tentative, 1);
        let names: Vec<&str> = free.iter().map(|b| b.name.as_str()).collect();
        // Bed B is person 1's own pick and must not be held against them.
        assert_eq!(names, vec!["B"]);
    }
}
