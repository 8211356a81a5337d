use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::PostDetail,
    ports::{
        incoming::use_cases::{GetPostError, GetPostUseCase},
        outgoing::PostRepository,
    },
};

#[derive(Debug, Clone)]
pub struct GetPostService<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetPostService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPostUseCase for GetPostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<PostDetail, GetPostError> {
        let posts = self
            .repository
            .all()
            .await
            .map_err(|e| GetPostError::RepositoryError(e.to_string()))?;

        PostDetail::from_posts(&posts, slug).ok_or(GetPostError::NotFound)
    }
}
