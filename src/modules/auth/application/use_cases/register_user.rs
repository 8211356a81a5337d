use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::{
    domain::{
        entities::{AuthenticatedSession, NewUser},
        password_rules::{check_new_password, PasswordRuleError},
    },
    ports::outgoing::{PasswordHasher, UserRepository, UserRepositoryError},
    services::SessionIssuer,
};
use crate::shared::validation::{is_blank, is_valid_email};

#[derive(Debug, Clone, Default)]
pub struct RegisterUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("You must agree to the Terms of Use and Privacy Policy")]
    TermsNotAccepted,

    #[error("All fields are required")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("An account with this email already exists")]
    EmailAlreadyExists,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PasswordRuleError> for RegisterUserError {
    fn from(error: PasswordRuleError) -> Self {
        match error {
            PasswordRuleError::Mismatch => RegisterUserError::PasswordMismatch,
            PasswordRuleError::TooShort => RegisterUserError::PasswordTooShort,
        }
    }
}

impl From<UserRepositoryError> for RegisterUserError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
            other => RegisterUserError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<AuthenticatedSession, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    session_issuer: SessionIssuer,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        session_issuer: SessionIssuer,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            session_issuer,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<AuthenticatedSession, RegisterUserError> {
        if !input.agree_to_terms {
            return Err(RegisterUserError::TermsNotAccepted);
        }

        if is_blank(&input.first_name)
            || is_blank(&input.last_name)
            || is_blank(&input.email)
            || input.password.is_empty()
        {
            return Err(RegisterUserError::MissingFields);
        }

        let email = input.email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(RegisterUserError::InvalidEmail);
        }

        // Checked again by the repository at insert time.
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        check_new_password(&input.password, &input.confirm_password)?;

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(NewUser {
                first_name: input.first_name.trim().to_string(),
                last_name: input.last_name.trim().to_string(),
                email,
                password_hash,
            })
            .await?;

        self.session_issuer
            .open(user)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))
    }
}
