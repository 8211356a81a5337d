use async_trait::async_trait;

use crate::blog::application::{
    domain::entities::{BlogPostSummary, PostPage},
    ports::{
        incoming::use_cases::{ListPostsError, ListPostsUseCase, PageQuery},
        outgoing::PostRepository,
    },
};

#[derive(Debug, Clone)]
pub struct ListPostsService<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListPostsService<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListPostsUseCase for ListPostsService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, query: PageQuery) -> Result<PostPage, ListPostsError> {
        let posts = self
            .repository
            .all()
            .await
            .map_err(|e| ListPostsError::RepositoryError(e.to_string()))?;

        let total = posts.len();
        let page: Vec<BlogPostSummary> = posts
            .iter()
            .skip(query.offset())
            .take(query.limit())
            .map(BlogPostSummary::from)
            .collect();
        let has_more = query.offset().saturating_add(page.len()) < total;

        Ok(PostPage {
            posts: page,
            total,
            has_more,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::adapter::outgoing::PostRepositoryStore;
    use crate::blog::application::domain::entities::BlogPost;
    use crate::shared::storage::StateStore;

    fn post(id: u64) -> BlogPost {
        BlogPost {
            id,
            slug: format!("post-{id}"),
            title: format!("Post {id}"),
            excerpt: "excerpt".to_string(),
            featured_image: String::new(),
            date: "2026-01-01".to_string(),
            category: "News".to_string(),
            content: "<p>body</p>".to_string(),
        }
    }

    async fn service_with(count: u64) -> ListPostsService<PostRepositoryStore> {
        let repo = PostRepositoryStore::new(StateStore::in_memory());
        let posts: Vec<_> = (1..=count).map(post).collect();
        repo.replace(&posts).await.unwrap();
        ListPostsService::new(repo)
    }

    #[tokio::test]
    async fn first_page_uses_default_size() {
        let service = service_with(8).await;

        let page = service.execute(PageQuery::default()).await.unwrap();

        assert_eq!(page.posts.len(), 6);
        assert_eq!(page.total, 8);
        assert!(page.has_more);
        assert_eq!(page.posts[0].slug, "post-1");
    }

    #[tokio::test]
    async fn last_page_has_no_more() {
        let service = service_with(8).await;

        let page = service
            .execute(PageQuery::new(Some(6), Some(6)))
            .await
            .unwrap();

        assert_eq!(page.posts.len(), 2);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn offset_past_the_end_is_empty() {
        let service = service_with(3).await;

        let page = service
            .execute(PageQuery::new(Some(10), None))
            .await
            .unwrap();

        assert!(page.posts.is_empty());
        assert_eq!(page.total, 3);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn seed_posts_are_listed_without_override() {
        let service = ListPostsService::new(PostRepositoryStore::new(StateStore::in_memory()));

        let page = service.execute(PageQuery::default()).await.unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.posts[0].slug, "boost-website-speed-2026");
    }
}
