use async_trait::async_trait;

use crate::blog::application::domain::entities::{BlogPost, PostDetail, PostListError, PostPage};

pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const MAX_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    offset: usize,
    limit: usize,
}

impl PageQuery {
    /// A missing or zero limit means the default page size; larger limits
    /// are clamped.
    pub fn new(offset: Option<usize>, limit: Option<usize>) -> Self {
        let limit = match limit {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(n) => n.min(MAX_PAGE_SIZE),
        };
        Self {
            offset: offset.unwrap_or(0),
            limit,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPostsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPostsUseCase: Send + Sync {
    async fn execute(&self, query: PageQuery) -> Result<PostPage, ListPostsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostError {
    #[error("Post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPostUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<PostDetail, GetPostError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplacePostsError {
    #[error(transparent)]
    Invalid(#[from] PostListError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReplacePostsUseCase: Send + Sync {
    async fn execute(&self, posts: Vec<BlogPost>) -> Result<Vec<BlogPost>, ReplacePostsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPostsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ResetPostsUseCase: Send + Sync {
    /// Restores the seed posts and returns them.
    async fn execute(&self) -> Result<Vec<BlogPost>, ResetPostsError>;
}
