use std::sync::Arc;

use chrono::Duration;
use tracing::warn;

use crate::auth::application::{
    domain::entities::{AuthenticatedSession, Session, User},
    ports::outgoing::{SessionRepository, SessionRepositoryError, TokenProvider},
};

/// Issues a token for a user and records the session behind it.
///
/// Opening a session also deletes every session older than `max_age`.
#[derive(Clone)]
pub struct SessionIssuer {
    sessions: Arc<dyn SessionRepository + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    max_age: Duration,
}

impl SessionIssuer {
    pub fn new(
        sessions: Arc<dyn SessionRepository + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        max_age: Duration,
    ) -> Self {
        Self {
            sessions,
            tokens,
            max_age,
        }
    }

    pub async fn open(&self, user: User) -> Result<AuthenticatedSession, SessionRepositoryError> {
        let auth_token = self.tokens.issue_token(user.id);

        if let Err(e) = self.sessions.prune_expired(self.max_age).await {
            warn!(error = %e, "Failed to prune expired sessions");
        }

        self.sessions
            .save_session(Session::new(auth_token.clone(), user.id), self.max_age)
            .await?;

        Ok(AuthenticatedSession { user, auth_token })
    }
}
