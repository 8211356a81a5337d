use async_trait::async_trait;

use crate::newsletter::application::domain::entities::Subscriber;
use crate::shared::validation::{is_blank, is_valid_email};

//
// ──────────────────────────────────────────────────────────
// Subscribe Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubscribeCommand {
    email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscribeCommandError {
    #[error("Please enter your email address")]
    EmptyEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl SubscribeCommand {
    pub fn new(email: String) -> Result<Self, SubscribeCommandError> {
        if is_blank(&email) {
            return Err(SubscribeCommandError::EmptyEmail);
        }

        let email = email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(SubscribeCommandError::InvalidEmail);
        }

        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscribeError {
    #[error("This email is already subscribed to our newsletter")]
    AlreadySubscribed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubscribeUseCase: Send + Sync {
    async fn execute(&self, command: SubscribeCommand) -> Result<Subscriber, SubscribeError>;
}
