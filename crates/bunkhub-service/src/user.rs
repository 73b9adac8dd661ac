//! User directory management.
//!
//! Users are registered here so bookings can name a requester and the
//! notification rules know who the admins are. Credentials and session
//! handling live with the external identity provider, not in this
//! service.

use std::sync::Arc;

use tracing::info;

use bunkhub_core::error::AppError;
use bunkhub_core::types::id::UserId;
use bunkhub_core::types::pagination::{PageRequest, PageResponse};
use bunkhub_database::repositories::user::UserRepository;
use bunkhub_entity::user::{CreateUser, User};

/// Manages the user directory.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Registers a user. Usernames are unique.
    pub async fn create_user(&self, req: CreateUser) -> Result<User, AppError> {
        if req.username.trim().is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }
        if self
            .user_repo
            .find_by_username(&req.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                req.username
            )));
        }

        let user = self.user_repo.create(&req).await?;
        info!(user_id = %user.id, username = %user.username, role = %user.role, "User created");
        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get_user(&self, id: UserId) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Lists users, newest first.
    pub async fn list_users(&self, page: PageRequest) -> Result<PageResponse<User>, AppError> {
        self.user_repo.list(&page).await
    }
}
