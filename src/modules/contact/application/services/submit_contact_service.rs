use async_trait::async_trait;
use chrono::Utc;

use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::{
        incoming::use_cases::{SubmitContactCommand, SubmitContactError, SubmitContactUseCase},
        outgoing::SubmissionRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SubmitContactService<R>
where
    R: SubmissionRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitContactService<R>
where
    R: SubmissionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: SubmissionRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactSubmission, SubmitContactError> {
        let submission = ContactSubmission {
            name: command.name().to_string(),
            email: command.email().to_string(),
            message: command.message().to_string(),
            submitted_at: Utc::now(),
        };

        self.repository
            .append(submission.clone())
            .await
            .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))?;

        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::adapter::outgoing::SubmissionRepositoryStore;
    use crate::shared::storage::StateStore;

    #[tokio::test]
    async fn submissions_are_appended() {
        let repo = SubmissionRepositoryStore::new(StateStore::in_memory());
        let service = SubmitContactService::new(repo.clone());

        for name in ["Jane", "John"] {
            let cmd = SubmitContactCommand::new(
                name.to_string(),
                "someone@example.com".to_string(),
                "Hello".to_string(),
            )
            .unwrap();
            service.execute(cmd).await.unwrap();
        }

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["Jane", "John"]);
    }
}
