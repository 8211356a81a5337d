use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::outgoing::{SessionRepository, SessionRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Session removal failed: {0}")]
    SessionRemovalFailed(String),
}

impl From<SessionRepositoryError> for LogoutError {
    fn from(error: SessionRepositoryError) -> Self {
        LogoutError::SessionRemovalFailed(error.to_string())
    }
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, auth_token: &str) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase {
    sessions: Arc<dyn SessionRepository + Send + Sync>,
}

impl LogoutUseCase {
    pub fn new(sessions: Arc<dyn SessionRepository + Send + Sync>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, auth_token: &str) -> Result<(), LogoutError> {
        self.sessions.delete_session(auth_token).await?;
        info!("Session closed");
        Ok(())
    }
}
