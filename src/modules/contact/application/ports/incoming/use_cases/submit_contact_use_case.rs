use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactSubmission;
use crate::shared::validation::{is_blank, is_valid_email};

#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactCommandError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl SubmitContactCommand {
    pub fn new(
        name: String,
        email: String,
        message: String,
    ) -> Result<Self, SubmitContactCommandError> {
        if is_blank(&name) || is_blank(&email) || is_blank(&message) {
            return Err(SubmitContactCommandError::MissingFields);
        }

        let email = email.trim().to_string();
        if !is_valid_email(&email) {
            return Err(SubmitContactCommandError::InvalidEmail);
        }

        Ok(Self {
            name: name.trim().to_string(),
            email,
            message: message.trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactSubmission, SubmitContactError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str, email: &str, message: &str) -> Result<SubmitContactCommand, SubmitContactCommandError> {
        SubmitContactCommand::new(name.to_string(), email.to_string(), message.to_string())
    }

    #[test]
    fn every_field_is_required() {
        for (name, email, message) in [
            ("", "jane@example.com", "Hello"),
            ("Jane", "", "Hello"),
            ("Jane", "jane@example.com", ""),
            ("Jane", "jane@example.com", "   "),
        ] {
            assert_eq!(
                command(name, email, message).unwrap_err(),
                SubmitContactCommandError::MissingFields
            );
        }
    }

    #[test]
    fn missing_fields_win_over_invalid_email() {
        assert_eq!(
            command("", "nope", "Hello").unwrap_err(),
            SubmitContactCommandError::MissingFields
        );
    }

    #[test]
    fn email_must_be_valid() {
        assert_eq!(
            command("Jane", "jane@example", "Hello").unwrap_err(),
            SubmitContactCommandError::InvalidEmail
        );
    }

    #[test]
    fn fields_are_trimmed() {
        let cmd = command(" Jane ", " Jane@Example.com ", " Hello\n").unwrap();
        assert_eq!(cmd.name(), "Jane");
        assert_eq!(cmd.email(), "Jane@Example.com");
        assert_eq!(cmd.message(), "Hello");
    }
}
