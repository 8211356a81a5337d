use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{ProfileChanges, User, UserId},
    ports::outgoing::{UserRepository, UserRepositoryError},
};
use crate::shared::validation::{is_blank, is_digits_only, is_valid_email};

#[derive(Clone, Debug)]
pub struct UpdateUserInput {
    pub user_id: UserId,
    pub changes: ProfileChanges,
}

#[derive(Debug, thiserror::Error, Clone)]
pub enum UpdateUserError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("An account with this email already exists")]
    EmailAlreadyExists,

    #[error("Phone number must contain only digits")]
    InvalidPhone,

    #[error("No user logged in")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for UpdateUserError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::EmailAlreadyExists => UpdateUserError::EmailAlreadyExists,
            UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
            other => UpdateUserError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateUserProfileUseCase: Send + Sync {
    async fn execute(&self, data: UpdateUserInput) -> Result<User, UpdateUserError>;
}

#[derive(Clone)]
pub struct UpdateUserProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateUserProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateUserProfileUseCase for UpdateUserProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, data: UpdateUserInput) -> Result<User, UpdateUserError> {
        let mut changes = data.changes;

        // A blank email means "leave it alone".
        changes.email = changes
            .email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !is_blank(e));

        if let Some(email) = &changes.email {
            if !is_valid_email(email) {
                return Err(UpdateUserError::InvalidEmail);
            }
        }

        if let Some(phone) = &changes.phone {
            if !is_digits_only(phone) {
                return Err(UpdateUserError::InvalidPhone);
            }
        }

        Ok(self
            .repository
            .update_profile(data.user_id, changes)
            .await?)
    }
}
