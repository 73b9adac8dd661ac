//! Notification recipient resolution rules — determines who should
//! receive which notifications.

use std::sync::Arc;

use bunkhub_core::error::AppError;
use bunkhub_core::types::id::UserId;
use bunkhub_database::repositories::user::UserRepository;
use bunkhub_entity::booking::Booking;
use bunkhub_entity::user::UserRole;

/// Resolves which users should receive notifications for a given event.
#[derive(Debug, Clone)]
pub struct NotificationRules {
    user_repo: Arc<UserRepository>,
}

impl NotificationRules {
    /// Creates a new notification rules engine.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Users who should hear about a newly submitted booking: every
    /// admin, minus the requester if they happen to be one.
    pub async fn submission_recipients(&self, booking: &Booking) -> Result<Vec<UserId>, AppError> {
        let admins = self.user_repo.find_by_role(UserRole::Admin).await?;
        Ok(admins
            .into_iter()
            .map(|u| u.id)
            .filter(|id| *id != booking.requester_id)
            .collect())
    }

    /// The user who should hear about a decision or allocation change:
    /// the requester.
    pub fn decision_recipient(&self, booking: &Booking) -> UserId {
        booking.requester_id
    }
}
