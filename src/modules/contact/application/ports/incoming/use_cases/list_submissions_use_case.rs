use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactSubmission;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSubmissionsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListSubmissionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactSubmission>, ListSubmissionsError>;
}
