use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::AuthenticatedSession,
    ports::outgoing::{PasswordHasher, UserRepository},
    services::SessionIssuer,
};
use crate::shared::validation::is_blank;

// ========================= Login Request =========================
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email and password are required")]
    MissingCredentials,
}

impl LoginRequest {
    /// Email is trimmed and lower-cased; the password is kept verbatim.
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        if is_blank(&email) || password.is_empty() {
            return Err(LoginRequestError::MissingCredentials);
        }

        Ok(Self {
            email: email.trim().to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<AuthenticatedSession, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    session_issuer: SessionIssuer,
}

impl<R> LoginUserUseCase<R>
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
impl<R> ILoginUserUseCase for LoginUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<AuthenticatedSession, LoginError> {
        let user = self
            .repository
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        self.session_issuer
            .open(user)
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::session_repository_store::SessionRepositoryStore;
    use crate::auth::adapter::outgoing::token::Base64TokenProvider;
    use crate::auth::adapter::outgoing::user_repository_store::UserRepositoryStore;
    use crate::auth::application::domain::entities::{NewUser, DEFAULT_SESSION_MAX_AGE_HOURS};
    use crate::auth::application::ports::outgoing::HashError;
    use crate::shared::storage::StateStore;

    #[derive(Debug)]
    struct MockPasswordHasher;

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(hash == format!("hashed:{password}"))
        }
    }

    #[derive(Debug)]
    struct BrokenPasswordHasher;

    #[async_trait]
    impl PasswordHasher for BrokenPasswordHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Err(HashError::HashFailed)
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Err(HashError::VerifyFailed)
        }
    }

    async fn seeded_store() -> StateStore {
        let store = StateStore::in_memory();
        UserRepositoryStore::new(store.clone())
            .create_user(NewUser {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane@example.com".to_string(),
                password_hash: "hashed:secret1".to_string(),
            })
            .await
            .unwrap();
        store
    }

    fn use_case_with(
        store: &StateStore,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> LoginUserUseCase<UserRepositoryStore> {
        let issuer = SessionIssuer::new(
            Arc::new(SessionRepositoryStore::new(store.clone())),
            Arc::new(Base64TokenProvider::new()),
            chrono::Duration::hours(DEFAULT_SESSION_MAX_AGE_HOURS),
        );
        LoginUserUseCase::new(UserRepositoryStore::new(store.clone()), hasher, issuer)
    }

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest::new(email.to_string(), password.to_string()).unwrap()
    }

    #[test]
    fn request_requires_both_fields() {
        assert_eq!(
            LoginRequest::new("".to_string(), "secret1".to_string()).unwrap_err(),
            LoginRequestError::MissingCredentials
        );
        assert_eq!(
            LoginRequest::new("jane@example.com".to_string(), "".to_string()).unwrap_err(),
            LoginRequestError::MissingCredentials
        );
    }

    #[test]
    fn request_normalizes_email_but_not_password() {
        let req = request("  Jane@Example.com ", " secret1 ");
        assert_eq!(req.email(), "jane@example.com");
        assert_eq!(req.password(), " secret1 ");
    }

    #[tokio::test]
    async fn login_success_opens_session() {
        let store = seeded_store().await;
        let use_case = use_case_with(&store, Arc::new(MockPasswordHasher));

        let session = use_case
            .execute(request("JANE@example.com", "secret1"))
            .await
            .unwrap();

        assert_eq!(session.user.email, "jane@example.com");
        assert!(!session.auth_token.is_empty());
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let store = seeded_store().await;
        let use_case = use_case_with(&store, Arc::new(MockPasswordHasher));

        for password in ["secret2", "Secret1", "secret1 ", "secret"] {
            let result = use_case.execute(request("jane@example.com", password)).await;
            assert!(
                matches!(result, Err(LoginError::InvalidCredentials)),
                "password {password:?} should not log in"
            );
        }
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let store = seeded_store().await;
        let use_case = use_case_with(&store, Arc::new(MockPasswordHasher));

        let result = use_case.execute(request("john@example.com", "secret1")).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn verification_failure_is_reported() {
        let store = seeded_store().await;
        let use_case = use_case_with(&store, Arc::new(BrokenPasswordHasher));

        let result = use_case.execute(request("jane@example.com", "secret1")).await;
        assert!(matches!(
            result,
            Err(LoginError::PasswordVerificationFailed(_))
        ));
    }
}
