use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactSubmission;
use crate::shared::storage::StoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmissionRepositoryError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn append(&self, submission: ContactSubmission) -> Result<(), SubmissionRepositoryError>;
    async fn list(&self) -> Result<Vec<ContactSubmission>, SubmissionRepositoryError>;
}
