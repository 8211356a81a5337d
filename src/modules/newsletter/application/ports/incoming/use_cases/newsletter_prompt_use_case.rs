use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptStatus {
    pub should_show: bool,
    pub last_shown: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PromptError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PromptStatusUseCase: Send + Sync {
    async fn execute(&self, is_authenticated: bool) -> Result<PromptStatus, PromptError>;
}

#[async_trait]
pub trait MarkPromptShownUseCase: Send + Sync {
    async fn execute(&self) -> Result<PromptStatus, PromptError>;
}
