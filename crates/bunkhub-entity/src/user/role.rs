//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles in the accommodation workflow.
///
/// Authentication is handled outside this service; roles exist so the
/// approval workflow and notification dispatch know who is an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Manages inventory, approves bookings, allocates beds.
    Admin,
    /// Assists with allocations but cannot manage events.
    Staff,
    /// Submits booking requests.
    Requester,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role may manage allocations.
    pub fn can_allocate(&self) -> bool {
        matches!(self, Self::Admin | Self::Staff)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Requester => "requester",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = bunkhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            "requester" => Ok(Self::Requester),
            _ => Err(bunkhub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, staff, requester"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_allocate() {
        assert!(UserRole::Admin.can_allocate());
        assert!(UserRole::Staff.can_allocate());
        assert!(!UserRole::Requester.can_allocate());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("STAFF".parse::<UserRole>().unwrap(), UserRole::Staff);
        assert!("invalid".parse::<UserRole>().is_err());
    }
}
