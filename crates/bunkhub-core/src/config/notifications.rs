//! In-app notification configuration.

use serde::{Deserialize, Serialize};

/// Notification retention settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Delete notifications older than this many days.
    #[serde(default = "default_cleanup_after_days")]
    pub cleanup_after_days: u32,
    /// Keep at most this many notifications per user.
    #[serde(default = "default_max_stored_per_user")]
    pub max_stored_per_user: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            cleanup_after_days: default_cleanup_after_days(),
            max_stored_per_user: default_max_stored_per_user(),
        }
    }
}

fn default_cleanup_after_days() -> u32 {
    90
}

fn default_max_stored_per_user() -> u32 {
    500
}
