use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::newsletter::application::ports::outgoing::{PromptRepository, PromptRepositoryError};
use crate::shared::storage::{keys, StateStore};

/// Keeps `newsletterModalLastShown` as an RFC 3339 string.
#[derive(Clone)]
pub struct PromptRepositoryStore {
    store: StateStore,
}

impl PromptRepositoryStore {
    pub fn new(store: StateStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PromptRepository for PromptRepositoryStore {
    async fn last_shown(&self) -> Result<Option<DateTime<Utc>>, PromptRepositoryError> {
        Ok(self.store.read(keys::NEWSLETTER_MODAL_LAST_SHOWN).await?)
    }

    async fn set_last_shown(&self, at: DateTime<Utc>) -> Result<(), PromptRepositoryError> {
        self.store
            .write(keys::NEWSLETTER_MODAL_LAST_SHOWN, &at)
            .await?;
        Ok(())
    }
}
