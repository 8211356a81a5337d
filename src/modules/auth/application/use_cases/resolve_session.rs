use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::{debug, warn};

use crate::auth::application::{
    domain::entities::AuthenticatedSession,
    ports::outgoing::{SessionRepository, TokenProvider, UserRepository},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveSessionError {
    #[error("Invalid or expired session")]
    InvalidToken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Turns a bearer token back into the logged-in user.
#[async_trait]
pub trait IResolveSessionUseCase: Send + Sync {
    async fn execute(&self, auth_token: &str) -> Result<AuthenticatedSession, ResolveSessionError>;
}

#[derive(Clone)]
pub struct ResolveSessionUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    users: R,
    sessions: Arc<dyn SessionRepository + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    max_age: Duration,
}

impl<R> ResolveSessionUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        users: R,
        sessions: Arc<dyn SessionRepository + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        max_age: Duration,
    ) -> Self {
        Self {
            users,
            sessions,
            tokens,
            max_age,
        }
    }
}

#[async_trait]
impl<R> IResolveSessionUseCase for ResolveSessionUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, auth_token: &str) -> Result<AuthenticatedSession, ResolveSessionError> {
        let claims = self
            .tokens
            .decode_token(auth_token)
            .map_err(|_| ResolveSessionError::InvalidToken)?;

        let session = self
            .sessions
            .find_session(auth_token)
            .await
            .map_err(|e| ResolveSessionError::RepositoryError(e.to_string()))?
            .ok_or(ResolveSessionError::InvalidToken)?;

        if session.is_expired_at(Utc::now(), self.max_age) {
            debug!(user_id = %session.user_id, "Session expired");
            if let Err(e) = self.sessions.delete_session(auth_token).await {
                warn!(error = %e, "Failed to delete expired session");
            }
            return Err(ResolveSessionError::InvalidToken);
        }

        if session.user_id != claims.user_id {
            warn!(user_id = %session.user_id, "Token does not match its session");
            return Err(ResolveSessionError::InvalidToken);
        }

        let user = self
            .users
            .find_by_id(session.user_id)
            .await
            .map_err(|e| ResolveSessionError::RepositoryError(e.to_string()))?
            .ok_or(ResolveSessionError::InvalidToken)?;

        Ok(AuthenticatedSession {
            user,
            auth_token: session.auth_token,
        })
    }
}
