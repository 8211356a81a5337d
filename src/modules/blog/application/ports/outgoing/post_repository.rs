use async_trait::async_trait;

use crate::blog::application::domain::entities::BlogPost;
use crate::shared::storage::StoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// The stored override when present, otherwise the seed posts.
    async fn all(&self) -> Result<Vec<BlogPost>, PostRepositoryError>;
    async fn replace(&self, posts: &[BlogPost]) -> Result<(), PostRepositoryError>;
    /// Drops the override.
    async fn reset(&self) -> Result<(), PostRepositoryError>;
}
