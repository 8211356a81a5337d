use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::storage::StoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PromptRepositoryError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

#[async_trait]
pub trait PromptRepository: Send + Sync {
    async fn last_shown(&self) -> Result<Option<DateTime<Utc>>, PromptRepositoryError>;
    async fn set_last_shown(&self, at: DateTime<Utc>) -> Result<(), PromptRepositoryError>;
}
