use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::{validate_posts, BlogPost},
    ports::{
        incoming::use_cases::{ReplacePostsError, ReplacePostsUseCase},
        outgoing::PostRepository,
    },
};

#[derive(Debug, Clone)]
pub struct ReplacePostsService<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
}

impl<R> ReplacePostsService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReplacePostsUseCase for ReplacePostsService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, posts: Vec<BlogPost>) -> Result<Vec<BlogPost>, ReplacePostsError> {
        validate_posts(&posts)?;

        self.repository
            .replace(&posts)
            .await
            .map_err(|e| ReplacePostsError::RepositoryError(e.to_string()))?;

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::adapter::outgoing::PostRepositoryStore;
    use crate::blog::application::domain::entities::PostListError;
    use crate::blog::application::domain::seed::seed_posts;
    use crate::shared::storage::StateStore;

    #[tokio::test]
    async fn stores_valid_list() {
        let repo = PostRepositoryStore::new(StateStore::in_memory());
        let service = ReplacePostsService::new(repo.clone());

        let mut posts = seed_posts();
        posts.truncate(1);
        service.execute(posts.clone()).await.unwrap();

        assert_eq!(repo.all().await.unwrap(), posts);
    }

    #[tokio::test]
    async fn duplicate_slugs_are_rejected_and_nothing_stored() {
        let repo = PostRepositoryStore::new(StateStore::in_memory());
        let service = ReplacePostsService::new(repo.clone());

        let mut posts = seed_posts();
        posts[1].slug = posts[0].slug.clone();
        let result = service.execute(posts).await;

        assert!(matches!(
            result,
            Err(ReplacePostsError::Invalid(PostListError::DuplicateSlug(_)))
        ));
        assert_eq!(repo.all().await.unwrap(), seed_posts());
    }
}
