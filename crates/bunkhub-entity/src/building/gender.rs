//! Building gender category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::booking::person::GenderCategory;

/// Gender category governing who may be housed in a building.
///
/// `male` buildings accept male/boy occupants, `female` buildings
/// accept female/girl occupants, `unisex` buildings accept everyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "building_gender", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BuildingGender {
    /// Houses male-category occupants only.
    Male,
    /// Houses female-category occupants only.
    Female,
    /// Houses occupants of any gender.
    Unisex,
}

impl BuildingGender {
    /// Whether this building category accepts the given person category.
    pub fn accepts(&self, category: GenderCategory) -> bool {
        match self {
            Self::Unisex => true,
            Self::Male => category == GenderCategory::Male,
            Self::Female => category == GenderCategory::Female,
        }
    }

    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unisex => "unisex",
        }
    }
}

impl fmt::Display for BuildingGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BuildingGender {
    type Err = bunkhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "unisex" => Ok(Self::Unisex),
            _ => Err(bunkhub_core::AppError::validation(format!(
                "Invalid building gender: '{s}'. Expected one of: male, female, unisex"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts() {
        assert!(BuildingGender::Male.accepts(GenderCategory::Male));
        assert!(!BuildingGender::Male.accepts(GenderCategory::Female));
        assert!(BuildingGender::Unisex.accepts(GenderCategory::Male));
        assert!(BuildingGender::Unisex.accepts(GenderCategory::Female));
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("Female".parse::<BuildingGender>().unwrap(), BuildingGender::Female);
        assert_eq!(" UNISEX ".parse::<BuildingGender>().unwrap(), BuildingGender::Unisex);
        assert!("mixed".parse::<BuildingGender>().is_err());
    }
}
