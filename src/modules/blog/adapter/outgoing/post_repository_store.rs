use async_trait::async_trait;

use crate::blog::application::{
    domain::{entities::BlogPost, seed::seed_posts},
    ports::outgoing::{PostRepository, PostRepositoryError},
};
use crate::shared::storage::{keys, StateStore};

#[derive(Clone)]
pub struct PostRepositoryStore {
    store: StateStore,
}

impl PostRepositoryStore {
    pub fn new(store: StateStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostRepository for PostRepositoryStore {
    async fn all(&self) -> Result<Vec<BlogPost>, PostRepositoryError> {
        let stored: Option<Vec<BlogPost>> = self.store.read(keys::BLOG_POSTS).await?;
        Ok(stored.unwrap_or_else(seed_posts))
    }

    async fn replace(&self, posts: &[BlogPost]) -> Result<(), PostRepositoryError> {
        self.store.write(keys::BLOG_POSTS, posts).await?;
        Ok(())
    }

    async fn reset(&self) -> Result<(), PostRepositoryError> {
        self.store.remove(keys::BLOG_POSTS).await?;
        Ok(())
    }
}
