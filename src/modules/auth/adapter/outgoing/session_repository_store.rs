use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::{debug, warn};

use crate::auth::application::{
    domain::entities::Session,
    ports::outgoing::{SessionRepository, SessionRepositoryError},
};
use crate::shared::storage::{keys, StateStore, StoreError};

/// One record per token under `authToken:<token>`.
#[derive(Clone)]
pub struct SessionRepositoryStore {
    store: StateStore,
}

impl SessionRepositoryStore {
    pub fn new(store: StateStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryStore {
    async fn save_session(
        &self,
        session: Session,
        max_age: Duration,
    ) -> Result<(), SessionRepositoryError> {
        let ttl_secs = u64::try_from(max_age.num_seconds()).unwrap_or(0);
        self.store
            .write_expiring(&keys::session_key(&session.auth_token), &session, ttl_secs)
            .await?;
        Ok(())
    }

    async fn find_session(&self, token: &str) -> Result<Option<Session>, SessionRepositoryError> {
        Ok(self.store.read(&keys::session_key(token)).await?)
    }

    async fn delete_session(&self, token: &str) -> Result<(), SessionRepositoryError> {
        self.store.remove(&keys::session_key(token)).await?;
        Ok(())
    }

    async fn prune_expired(&self, max_age: Duration) -> Result<usize, SessionRepositoryError> {
        let now = Utc::now();
        let mut expired = Vec::new();

        for key in self.store.keys_with_prefix(&keys::session_key_prefix()).await? {
            match self.store.read::<Session>(&key).await {
                Ok(Some(session)) if session.is_expired_at(now, max_age) => expired.push(key),
                Ok(_) => {}
                // Unreadable records can never authenticate.
                Err(StoreError::Serialization(e)) => {
                    warn!(error = %e, "Dropping unreadable session record");
                    expired.push(key);
                }
                Err(e) => return Err(e.into()),
            }
        }

        if !expired.is_empty() {
            self.store.remove_many(&expired).await?;
            debug!(count = expired.len(), "Pruned expired sessions");
        }
        Ok(expired.len())
    }
}
