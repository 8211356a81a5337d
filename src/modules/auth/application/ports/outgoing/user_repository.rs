use async_trait::async_trait;

use crate::auth::application::domain::entities::{NewUser, ProfileChanges, User, UserId};
use crate::shared::storage::StoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("An account with this email already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Case-insensitive lookup.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Inserts the user, making it administrator when no user exists yet.
    /// Fails with `EmailAlreadyExists` when the email is taken.
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepositoryError>;

    /// Fails with `EmailAlreadyExists` when the new email belongs to
    /// another user.
    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<User, UserRepositoryError>;
}
