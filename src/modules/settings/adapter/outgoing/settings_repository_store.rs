use async_trait::async_trait;

use crate::settings::application::{
    domain::entities::SiteSettings,
    ports::outgoing::{SettingsRepository, SettingsRepositoryError},
};
use crate::shared::storage::{keys, StateStore};

#[derive(Clone)]
pub struct SettingsRepositoryStore {
    store: StateStore,
}

impl SettingsRepositoryStore {
    pub fn new(store: StateStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryStore {
    async fn load(&self) -> Result<Option<SiteSettings>, SettingsRepositoryError> {
        Ok(self.store.read(keys::SITE_SETTINGS).await?)
    }

    async fn save(&self, settings: &SiteSettings) -> Result<(), SettingsRepositoryError> {
        self.store.write(keys::SITE_SETTINGS, settings).await?;
        Ok(())
    }
}
