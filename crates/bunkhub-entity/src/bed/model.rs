//! Bed entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use bunkhub_core::types::id::{BedId, RoomId};

/// Physical bed type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "bed_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BedType {
    /// A regular single bed.
    Single,
    /// A mattress placed on the floor.
    FloorBed,
}

impl BedType {
    /// Return the bed type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::FloorBed => "floor_bed",
        }
    }
}

impl fmt::Display for BedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BedType {
    type Err = bunkhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "floor_bed" => Ok(Self::FloorBed),
            _ => Err(bunkhub_core::AppError::validation(format!(
                "Invalid bed type: '{s}'. Expected one of: single, floor_bed"
            ))),
        }
    }
}

/// A single bed within a room.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bed {
    /// Unique bed identifier.
    pub id: BedId,
    /// The room this bed belongs to.
    pub room_id: RoomId,
    /// Bed label as displayed to admins (e.g. "A", "Window bunk").
    pub name: String,
    /// Physical bed type.
    pub bed_type: BedType,
    /// Ordering position within the room.
    pub position: i32,
    /// When the bed was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new bed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBed {
    /// The room this bed belongs to.
    pub room_id: RoomId,
    /// Bed label.
    pub name: String,
    /// Physical bed type.
    pub bed_type: BedType,
    /// Ordering position within the room.
    pub position: i32,
}

/// Data for updating an existing bed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBed {
    /// New bed label.
    pub name: Option<String>,
    /// New bed type.
    pub bed_type: Option<BedType>,
    /// New ordering position.
    pub position: Option<i32>,
}
