use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use super::{KeyValueStore, StoreError};

/// Redis-backed site state.
///
/// Every key lives under a prefix so several sites can share one Redis:
///
/// ```text
/// {prefix}users                 -> JSON array of users
/// {prefix}authToken:{token}     -> JSON session
/// {prefix}siteSettings          -> JSON settings
/// ```
#[derive(Clone)]
pub struct RedisStore {
    pool: Arc<Pool>,
    prefix: String,
}

impl RedisStore {
    pub fn new(pool: Arc<Pool>, prefix: impl Into<String>) -> Self {
        Self {
            pool,
            prefix: prefix.into(),
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, StoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| StoreError::Backend(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.get_conn().await?;
        conn.get::<_, Option<String>>(self.key(key))
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut conn = self.get_conn().await?;
        conn.set::<_, _, ()>(self.key(key), value)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.get_conn().await?;
        conn.del::<_, ()>(self.key(key))
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn set_expiring(&self, key: &str, value: String, ttl_secs: u64) -> Result<(), StoreError> {
        let mut conn = self.get_conn().await?;
        conn.set_ex::<_, _, ()>(self.key(key), value, ttl_secs.max(1))
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn remove_many(&self, keys: &[String]) -> Result<(), StoreError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.get_conn().await?;
        let prefixed: Vec<String> = keys.iter().map(|key| self.key(key)).collect();
        conn.del::<_, ()>(prefixed)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    // SCAN instead of KEYS so a large keyspace never blocks the server.
    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let mut conn = self.get_conn().await?;
        let pattern = format!("{}*", self.key(prefix));
        let mut cursor: u64 = 0;
        let mut found = Vec::new();

        loop {
            let (next, batch): (u64, Vec<String>) = deadpool_redis::redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await
                .map_err(|e| StoreError::Backend(e.to_string()))?;

            found.extend(
                batch
                    .into_iter()
                    .filter_map(|key| key.strip_prefix(&self.prefix).map(str::to_string)),
            );

            if next == 0 {
                break;
            }
            cursor = next;
        }

        Ok(found)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.get_conn().await?;
        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}
