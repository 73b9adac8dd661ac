//! Person entity model and gender classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use bunkhub_core::types::id::{BookingId, PersonId};

use super::period::StayPeriod;

/// Age above which boy/girl occupants are flagged for review.
pub const MINOR_AGE_LIMIT: i32 = 16;

/// Declared gender of a person in a booking.
///
/// Source data shows inconsistent casing, so parsing is always
/// case-normalized. `boy`/`girl` map onto the male/female building
/// capacity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "person_gender", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Adult male.
    Male,
    /// Adult female.
    Female,
    /// Male child.
    Boy,
    /// Female child.
    Girl,
}

/// Building capacity category a person counts against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderCategory {
    /// Counts against male capacity.
    Male,
    /// Counts against female capacity.
    Female,
}

impl Gender {
    /// Map this gender onto its building capacity category.
    pub fn category(&self) -> GenderCategory {
        match self {
            Self::Male | Self::Boy => GenderCategory::Male,
            Self::Female | Self::Girl => GenderCategory::Female,
        }
    }

    /// Whether this is a child category (`boy`/`girl`).
    pub fn is_child(&self) -> bool {
        matches!(self, Self::Boy | Self::Girl)
    }

    /// Return the gender as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Boy => "boy",
            Self::Girl => "girl",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = bunkhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "boy" => Ok(Self::Boy),
            "girl" => Ok(Self::Girl),
            _ => Err(bunkhub_core::AppError::validation(format!(
                "Invalid gender: '{s}'. Expected one of: male, female, boy, girl"
            ))),
        }
    }
}

/// A person travelling under a booking.
///
/// Owned by exactly one booking; `person_index` is the person's stable
/// position within the booking roster and is what allocations key on.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingPerson {
    /// Unique person identifier.
    pub id: PersonId,
    /// The owning booking.
    pub booking_id: BookingId,
    /// Position within the booking roster (0-based).
    pub person_index: i32,
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Declared gender.
    pub gender: Gender,
    /// Per-person stay start, overriding the booking default.
    pub stay_from: Option<NaiveDate>,
    /// Per-person stay end, overriding the booking default.
    pub stay_to: Option<NaiveDate>,
}

impl BookingPerson {
    /// The person's effective stay period, falling back to the
    /// booking-level default when no override is present.
    pub fn effective_period(&self, booking_default: Option<StayPeriod>) -> Option<StayPeriod> {
        StayPeriod::from_optional(self.stay_from, self.stay_to).or(booking_default)
    }

    /// A child-category person older than the minor age limit.
    ///
    /// Flagged for admin review; this is a roster validation concern
    /// and never affects availability or gender eligibility.
    pub fn flagged_overage(&self) -> bool {
        self.gender.is_child() && self.age > MINOR_AGE_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_category_mapping() {
        assert_eq!(Gender::Boy.category(), GenderCategory::Male);
        assert_eq!(Gender::Girl.category(), GenderCategory::Female);
        assert_eq!(Gender::Male.category(), GenderCategory::Male);
        assert_eq!(Gender::Female.category(), GenderCategory::Female);
    }

    #[test]
    fn test_gender_parse_normalizes_case() {
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" Girl ".parse::<Gender>().unwrap(), Gender::Girl);
        assert!("other".parse::<Gender>().is_err());
    }

    fn person(age: i32, gender: Gender) -> BookingPerson {
        BookingPerson {
            id: PersonId::new(),
            booking_id: BookingId::new(),
            person_index: 0,
            name: "Test".to_string(),
            age,
            gender,
            stay_from: None,
            stay_to: None,
        }
    }

    #[test]
    fn test_flagged_overage() {
        assert!(person(17, Gender::Girl).flagged_overage());
        assert!(!person(10, Gender::Girl).flagged_overage());
        assert!(!person(17, Gender::Female).flagged_overage());
    }
}
