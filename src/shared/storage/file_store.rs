use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::info;

use super::{KeyValueStore, StoreError};

/// Keeps the whole mapping in memory and rewrites a single JSON file after
/// every change. The file is a flat `{ "key": "<json text>" }` object.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Load the mapping from `path`, starting empty when the file does not
    /// exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<HashMap<String, String>>(&bytes)
                .map_err(|e| StoreError::Serialization(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StoreError::Backend(e.to_string())),
        };

        info!(path = %path.display(), keys = entries.len(), "Opened state file");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    // Write to a sibling temp file and rename over the target.
    async fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let bytes =
            serde_json::to_vec_pretty(entries).map_err(|e| StoreError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::Backend(e.to_string()))?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, bytes)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        let mut next = entries.clone();
        next.insert(key.to_string(), value);
        self.flush(&next).await?;
        *entries = next;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.remove_many(&[key.to_string()]).await
    }

    async fn remove_many(&self, keys: &[String]) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        let mut next = entries.clone();
        let before = next.len();
        for key in keys {
            next.remove(key);
        }
        if next.len() == before {
            return Ok(());
        }
        self.flush(&next).await?;
        *entries = next;
        Ok(())
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .entries
            .read()
            .await
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("site-state-{}", Uuid::new_v4()))
            .join("state.json")
    }

    #[tokio::test]
    async fn open_missing_file_starts_empty() {
        let store = JsonFileStore::open(temp_path()).await.unwrap();
        assert_eq!(store.get("users").await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let path = temp_path();

        let store = JsonFileStore::open(&path).await.unwrap();
        store
            .set("siteSettings", r##"{"primaryColor":"#000000"}"##.to_string())
            .await
            .unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("siteSettings").await.unwrap().as_deref(),
            Some(r##"{"primaryColor":"#000000"}"##)
        );

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn remove_is_persisted() {
        let path = temp_path();

        let store = JsonFileStore::open(&path).await.unwrap();
        store.set("a", "1".to_string()).await.unwrap();
        store.set("b", "2".to_string()).await.unwrap();
        store.remove("a").await.unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(reopened.get("a").await.unwrap(), None);
        assert_eq!(reopened.get("b").await.unwrap().as_deref(), Some("2"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"not json").unwrap();

        let result = JsonFileStore::open(&path).await;
        assert!(matches!(result, Err(StoreError::Serialization(_))));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    // A directory squatting on the temp path makes every flush fail.
    fn block_flush(path: &std::path::Path) {
        std::fs::create_dir_all(path.with_extension("json.tmp")).unwrap();
    }

    #[tokio::test]
    async fn failed_flush_leaves_set_invisible() {
        let path = temp_path();
        let store = JsonFileStore::open(&path).await.unwrap();
        store.set("users", "[]".to_string()).await.unwrap();
        block_flush(&path);

        let result = store.set("users", r#"[{"id":1}]"#.to_string()).await;
        assert!(matches!(result, Err(StoreError::Backend(_))));
        assert_eq!(store.get("users").await.unwrap().as_deref(), Some("[]"));

        let result = store.set("siteSettings", "{}".to_string()).await;
        assert!(result.is_err());
        assert_eq!(store.get("siteSettings").await.unwrap(), None);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn failed_flush_leaves_removed_keys_in_place() {
        let path = temp_path();
        let store = JsonFileStore::open(&path).await.unwrap();
        store.set("a", "1".to_string()).await.unwrap();
        block_flush(&path);

        assert!(store.remove("a").await.is_err());
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn remove_many_and_prefix_listing() {
        let path = temp_path();
        let store = JsonFileStore::open(&path).await.unwrap();
        for key in ["authToken:a", "authToken:b", "users"] {
            store.set(key, "1".to_string()).await.unwrap();
        }

        let mut sessions = store.keys_with_prefix("authToken:").await.unwrap();
        sessions.sort();
        assert_eq!(sessions, vec!["authToken:a", "authToken:b"]);

        store.remove_many(&sessions).await.unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert!(reopened.keys_with_prefix("authToken:").await.unwrap().is_empty());
        assert_eq!(reopened.get("users").await.unwrap().as_deref(), Some("1"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
