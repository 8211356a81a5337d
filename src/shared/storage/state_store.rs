use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{InMemoryStore, KeyValueStore, StoreError};

/// Typed JSON access to the site state.
///
/// This is the only owner of the key-value backend: repositories hold a
/// clone and never reach the backend directly. Every write goes through
/// `write_lock`, so a read-modify-write done with [`StateStore::update`] is
/// never interleaved with another write from this process.
#[derive(Clone)]
pub struct StateStore {
    backend: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl StateStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get(key).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Serialization(format!("{key}: {e}"))),
            None => Ok(None),
        }
    }

    pub async fn read_or_default<T: DeserializeOwned + Default>(
        &self,
        key: &str,
    ) -> Result<T, StoreError> {
        Ok(self.read(key).await?.unwrap_or_default())
    }

    pub async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_unlocked(key, value).await
    }

    pub async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.backend.remove(key).await
    }

    /// Like [`StateStore::write`], but the backend may expire the value after
    /// `ttl_secs`.
    pub async fn write_expiring<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl_secs: u64,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StoreError::Serialization(format!("{key}: {e}")))?;
        let _guard = self.write_lock.lock().await;
        self.backend.set_expiring(key, raw, ttl_secs).await
    }

    pub async fn remove_many(&self, keys: &[String]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.backend.remove_many(keys).await
    }

    pub async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        self.backend.keys_with_prefix(prefix).await
    }

    /// Read the value under `key` (or its default), let `f` mutate it, and
    /// write it back. Nothing is written when `f` fails.
    pub async fn update<T, R, E, F>(&self, key: &str, f: F) -> Result<R, E>
    where
        T: DeserializeOwned + Serialize + Default,
        E: From<StoreError>,
        F: FnOnce(&mut T) -> Result<R, E>,
    {
        let _guard = self.write_lock.lock().await;

        let mut value: T = self.read_or_default(key).await?;
        let result = f(&mut value)?;
        self.write_unlocked(key, &value).await?;

        Ok(result)
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.backend.ping().await
    }

    async fn write_unlocked<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StoreError::Serialization(format!("{key}: {e}")))?;
        self.backend.set(key, raw).await
    }
}
