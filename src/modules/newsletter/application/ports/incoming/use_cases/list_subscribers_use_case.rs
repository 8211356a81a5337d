use async_trait::async_trait;

use crate::newsletter::application::domain::entities::Subscriber;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSubscribersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListSubscribersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Subscriber>, ListSubscribersError>;
}
