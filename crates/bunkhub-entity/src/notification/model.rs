//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

use bunkhub_core::types::id::{NotificationId, UserId};

/// Category of an in-app notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    /// A new booking was submitted.
    BookingSubmitted,
    /// A booking was approved or declined.
    BookingDecision,
    /// Bed allocations changed.
    AllocationChanged,
}

impl NotificationCategory {
    /// Return the category as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BookingSubmitted => "booking_submitted",
            Self::BookingDecision => "booking_decision",
            Self::AllocationChanged => "allocation_changed",
        }
    }
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An in-app notification to be shown to a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The recipient user.
    pub user_id: UserId,
    /// Notification category.
    pub category: NotificationCategory,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Additional structured data (JSON).
    pub payload: Option<serde_json::Value>,
    /// Whether the user has read this notification.
    pub is_read: bool,
    /// When the notification was read.
    pub read_at: Option<DateTime<Utc>>,
    /// Whether the user dismissed this notification.
    pub is_dismissed: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}
