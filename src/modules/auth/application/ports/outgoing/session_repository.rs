use async_trait::async_trait;
use chrono::Duration;

use crate::auth::application::domain::entities::Session;
use crate::shared::storage::StoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionRepositoryError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// `max_age` lets backends with native expiry drop the record on their own.
    async fn save_session(
        &self,
        session: Session,
        max_age: Duration,
    ) -> Result<(), SessionRepositoryError>;
    async fn find_session(&self, token: &str) -> Result<Option<Session>, SessionRepositoryError>;
    /// Removing an unknown token is not an error.
    async fn delete_session(&self, token: &str) -> Result<(), SessionRepositoryError>;
    /// Deletes every session older than `max_age`, returning how many went.
    async fn prune_expired(&self, max_age: Duration) -> Result<usize, SessionRepositoryError>;
}
