use async_trait::async_trait;
use chrono::Utc;

use crate::newsletter::application::{
    domain::prompt::should_show_prompt,
    ports::{
        incoming::use_cases::{
            MarkPromptShownUseCase, PromptError, PromptStatus, PromptStatusUseCase,
        },
        outgoing::PromptRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PromptStatusService<R>
where
    R: PromptRepository + Send + Sync,
{
    repository: R,
}

impl<R> PromptStatusService<R>
where
    R: PromptRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PromptStatusUseCase for PromptStatusService<R>
where
    R: PromptRepository + Send + Sync,
{
    async fn execute(&self, is_authenticated: bool) -> Result<PromptStatus, PromptError> {
        let last_shown = self
            .repository
            .last_shown()
            .await
            .map_err(|e| PromptError::RepositoryError(e.to_string()))?;

        Ok(PromptStatus {
            should_show: should_show_prompt(is_authenticated, last_shown, Utc::now()),
            last_shown,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MarkPromptShownService<R>
where
    R: PromptRepository + Send + Sync,
{
    repository: R,
}

impl<R> MarkPromptShownService<R>
where
    R: PromptRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkPromptShownUseCase for MarkPromptShownService<R>
where
    R: PromptRepository + Send + Sync,
{
    async fn execute(&self) -> Result<PromptStatus, PromptError> {
        let now = Utc::now();

        self.repository
            .set_last_shown(now)
            .await
            .map_err(|e| PromptError::RepositoryError(e.to_string()))?;

        Ok(PromptStatus {
            should_show: false,
            last_shown: Some(now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::newsletter::adapter::outgoing::PromptRepositoryStore;
    use crate::shared::storage::StateStore;
    use chrono::Duration;

    #[tokio::test]
    async fn fresh_site_shows_prompt_to_visitors_only() {
        let service = PromptStatusService::new(PromptRepositoryStore::new(StateStore::in_memory()));

        assert!(service.execute(false).await.unwrap().should_show);
        assert!(!service.execute(true).await.unwrap().should_show);
    }

    #[tokio::test]
    async fn marking_shown_hides_prompt() {
        let repo = PromptRepositoryStore::new(StateStore::in_memory());

        let marked = MarkPromptShownService::new(repo.clone())
            .execute()
            .await
            .unwrap();
        let status = PromptStatusService::new(repo).execute(false).await.unwrap();

        assert!(!status.should_show);
        assert_eq!(status.last_shown, marked.last_shown);
    }

    #[tokio::test]
    async fn prompt_returns_after_cooldown() {
        let repo = PromptRepositoryStore::new(StateStore::in_memory());
        repo.set_last_shown(Utc::now() - Duration::days(8))
            .await
            .unwrap();

        let status = PromptStatusService::new(repo).execute(false).await.unwrap();
        assert!(status.should_show);
    }
}
