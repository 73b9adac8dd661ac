//! Gender eligibility predicate.

use bunkhub_entity::booking::Gender;
use bunkhub_entity::building::{Building, BuildingGender};

/// Whether a building's gender category permits housing a person of
/// the given gender.
///
/// `unisex` buildings accept everyone; `male` buildings accept
/// male/boy; `female` buildings accept female/girl. Age plays no part
/// here: an overage boy/girl is a roster validation concern flagged by
/// the caller, never an eligibility rule.
pub fn is_gender_eligible(building_gender: BuildingGender, person_gender: Gender) -> bool {
    building_gender.accepts(person_gender.category())
}

/// Filter buildings down to those that may house the given person,
/// preserving input order.
pub fn eligible_buildings(buildings: &[Building], person_gender: Gender) -> Vec<&Building> {
    buildings
        .iter()
        .filter(|b| is_gender_eligible(b.gender, person_gender))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bunkhub_core::types::id::{BuildingId, EventId};
    use chrono::Utc;

    #[test]
    fn test_male_building() {
        assert!(is_gender_eligible(BuildingGender::Male, Gender::Male));
        assert!(is_gender_eligible(BuildingGender::Male, Gender::Boy));
        assert!(!is_gender_eligible(BuildingGender::Male, Gender::Female));
        assert!(!is_gender_eligible(BuildingGender::Male, Gender::Girl));
    }

    #[test]
    fn test_female_building() {
        assert!(is_gender_eligible(BuildingGender::Female, Gender::Female));
        assert!(is_gender_eligible(BuildingGender::Female, Gender::Girl));
        assert!(!is_gender_eligible(BuildingGender::Female, Gender::Boy));
    }

    #[test]
    fn test_unisex_building_accepts_all() {
        for gender in [Gender::Male, Gender::Female, Gender::Boy, Gender::Girl] {
            assert!(is_gender_eligible(BuildingGender::Unisex, gender));
        }
    }

    fn building(name: &str, gender: BuildingGender) -> Building {
        Building {
            id: BuildingId::new(),
            event_id: EventId::new(),
            name: name.to_string(),
            gender,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_eligible_buildings_preserves_order() {
        let buildings = vec![
            building("Men's Hall", BuildingGender::Male),
            building("Women's Hall", BuildingGender::Female),
            building("Family Block", BuildingGender::Unisex),
        ];
        let eligible = eligible_buildings(&buildings, Gender::Girl);
        let names: Vec<&str> = eligible.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Women's Hall", "Family Block"]);
    }
}
