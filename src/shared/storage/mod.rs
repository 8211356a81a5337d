// src/shared/storage/mod.rs
mod file_store;
pub mod keys;
mod memory_store;
mod redis_store;
mod state_store;

use async_trait::async_trait;

pub use file_store::JsonFileStore;
pub use memory_store::InMemoryStore;
pub use redis_store::RedisStore;
pub use state_store::StateStore;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Raw string key-value backend. Values are JSON documents written by
/// [`StateStore`]; backends never interpret them.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Stores a value the backend may drop after `ttl_secs`. Backends without
    /// native expiry keep it until it is removed.
    async fn set_expiring(&self, key: &str, value: String, ttl_secs: u64) -> Result<(), StoreError> {
        let _ = ttl_secs;
        self.set(key, value).await
    }

    async fn remove_many(&self, keys: &[String]) -> Result<(), StoreError> {
        for key in keys {
            self.remove(key).await?;
        }
        Ok(())
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError>;
    async fn ping(&self) -> Result<(), StoreError>;
}
