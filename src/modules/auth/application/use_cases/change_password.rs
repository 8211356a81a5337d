use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::{
    domain::{
        entities::{User, UserId},
        password_rules::{check_new_password, PasswordRuleError},
    },
    ports::outgoing::{PasswordHasher, UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct ChangePasswordInput {
    pub user_id: UserId,
    pub new_password: String,
    pub confirm_password: String,
    pub confirmed: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("You must confirm the password change")]
    NotConfirmed,

    #[error("Both password fields are required")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("No user logged in")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PasswordRuleError> for ChangePasswordError {
    fn from(error: PasswordRuleError) -> Self {
        match error {
            PasswordRuleError::Mismatch => ChangePasswordError::PasswordMismatch,
            PasswordRuleError::TooShort => ChangePasswordError::PasswordTooShort,
        }
    }
}

impl From<UserRepositoryError> for ChangePasswordError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::UserNotFound => ChangePasswordError::UserNotFound,
            other => ChangePasswordError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(&self, input: ChangePasswordInput) -> Result<User, ChangePasswordError>;
}

#[derive(Clone)]
pub struct ChangePasswordUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> ChangePasswordUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IChangePasswordUseCase for ChangePasswordUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: ChangePasswordInput) -> Result<User, ChangePasswordError> {
        if !input.confirmed {
            return Err(ChangePasswordError::NotConfirmed);
        }

        if input.new_password.is_empty() || input.confirm_password.is_empty() {
            return Err(ChangePasswordError::MissingFields);
        }

        check_new_password(&input.new_password, &input.confirm_password)?;

        let password_hash = self
            .password_hasher
            .hash_password(&input.new_password)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        Ok(self
            .repository
            .update_password(input.user_id, password_hash)
            .await?)
    }
}
