use async_trait::async_trait;

use crate::settings::application::domain::entities::SiteSettings;
use crate::shared::storage::StoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsRepositoryError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// `None` until an administrator saves settings for the first time.
    async fn load(&self) -> Result<Option<SiteSettings>, SettingsRepositoryError>;
    async fn save(&self, settings: &SiteSettings) -> Result<(), SettingsRepositoryError>;
}
