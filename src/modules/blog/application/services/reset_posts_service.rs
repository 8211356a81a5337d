use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::BlogPost,
    ports::{
        incoming::use_cases::{ResetPostsError, ResetPostsUseCase},
        outgoing::PostRepository,
    },
};

#[derive(Debug, Clone)]
pub struct ResetPostsService<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
}

impl<R> ResetPostsService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ResetPostsUseCase for ResetPostsService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<BlogPost>, ResetPostsError> {
        self.repository
            .reset()
            .await
            .map_err(|e| ResetPostsError::RepositoryError(e.to_string()))?;

        self.repository
            .all()
            .await
            .map_err(|e| ResetPostsError::RepositoryError(e.to_string()))
    }
}
