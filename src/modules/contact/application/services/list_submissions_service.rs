use async_trait::async_trait;

use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::{
        incoming::use_cases::{ListSubmissionsError, ListSubmissionsUseCase},
        outgoing::SubmissionRepository,
    },
};

#[derive(Debug, Clone)]
pub struct ListSubmissionsService<R>
where
    R: SubmissionRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListSubmissionsService<R>
where
    R: SubmissionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListSubmissionsUseCase for ListSubmissionsService<R>
where
    R: SubmissionRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactSubmission>, ListSubmissionsError> {
        self.repository
            .list()
            .await
            .map_err(|e| ListSubmissionsError::RepositoryError(e.to_string()))
    }
}
