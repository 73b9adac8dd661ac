//! Notification creation and inbox management.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;
use tracing::info;

use bunkhub_core::config::NotificationConfig;
use bunkhub_core::error::AppError;
use bunkhub_core::types::id::{NotificationId, UserId};
use bunkhub_core::types::pagination::{PageRequest, PageResponse};
use bunkhub_database::repositories::notification::NotificationRepository;
use bunkhub_entity::booking::Booking;
use bunkhub_entity::notification::{Notification, NotificationCategory};

use super::rules::NotificationRules;

/// Creates workflow notifications and manages user inboxes.
#[derive(Debug, Clone)]
pub struct NotificationService {
    notification_repo: Arc<NotificationRepository>,
    rules: Arc<NotificationRules>,
    config: NotificationConfig,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(
        notification_repo: Arc<NotificationRepository>,
        rules: Arc<NotificationRules>,
        config: NotificationConfig,
    ) -> Self {
        Self {
            notification_repo,
            rules,
            config,
        }
    }

    /// Notifies every admin that a booking was submitted.
    pub async fn booking_submitted(&self, booking: &Booking) -> Result<(), AppError> {
        let recipients = self.rules.submission_recipients(booking).await?;
        let payload = json!({ "booking_id": booking.id, "event_id": booking.event_id });

        for user_id in recipients {
            self.notification_repo
                .create(
                    user_id,
                    NotificationCategory::BookingSubmitted,
                    "New booking request",
                    &format!(
                        "A booking for {} to {} is awaiting review",
                        booking.stay_from, booking.stay_to
                    ),
                    Some(&payload),
                )
                .await?;
        }
        Ok(())
    }

    /// Notifies the requester that their booking was decided or moved
    /// back to pending.
    pub async fn booking_decided(&self, booking: &Booking) -> Result<(), AppError> {
        let recipient = self.rules.decision_recipient(booking);
        let payload = json!({ "booking_id": booking.id, "status": booking.status });

        self.notification_repo
            .create(
                recipient,
                NotificationCategory::BookingDecision,
                &format!("Booking {}", booking.status),
                &format!("Your booking is now {}", booking.status),
                Some(&payload),
            )
            .await?;
        Ok(())
    }

    /// Notifies the requester that their bed allocations changed.
    pub async fn allocations_changed(&self, booking: &Booking) -> Result<(), AppError> {
        let recipient = self.rules.decision_recipient(booking);
        let payload = json!({ "booking_id": booking.id });

        self.notification_repo
            .create(
                recipient,
                NotificationCategory::AllocationChanged,
                "Bed allocations updated",
                "The bed assignments for your booking were updated",
                Some(&payload),
            )
            .await?;
        Ok(())
    }

    /// Lists a user's non-dismissed notifications, newest first.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResponse<Notification>, AppError> {
        self.notification_repo.find_by_user(user_id, &page).await
    }

    /// Count of a user's unread notifications.
    pub async fn unread_count(&self, user_id: UserId) -> Result<i64, AppError> {
        self.notification_repo.count_unread(user_id).await
    }

    /// Marks one notification as read.
    pub async fn mark_read(&self, id: NotificationId, user_id: UserId) -> Result<(), AppError> {
        self.notification_repo.mark_read(id, user_id).await
    }

    /// Marks all of a user's notifications as read, returning how many
    /// changed.
    pub async fn mark_all_read(&self, user_id: UserId) -> Result<i64, AppError> {
        self.notification_repo.mark_all_read(user_id).await
    }

    /// Dismisses a notification from the user's inbox.
    pub async fn dismiss(&self, id: NotificationId, user_id: UserId) -> Result<(), AppError> {
        self.notification_repo.dismiss(id, user_id).await
    }

    /// Removes old notifications and trims oversized inboxes per the
    /// retention configuration.
    pub async fn run_maintenance(&self) -> Result<(), AppError> {
        let cutoff = Utc::now() - Duration::days(i64::from(self.config.cleanup_after_days));
        let removed = self.notification_repo.cleanup_old(cutoff).await?;
        let trimmed = self
            .notification_repo
            .trim_per_user(i64::from(self.config.max_stored_per_user))
            .await?;
        if removed > 0 || trimmed > 0 {
            info!(removed, trimmed, "Notification maintenance completed");
        }
        Ok(())
    }
}
