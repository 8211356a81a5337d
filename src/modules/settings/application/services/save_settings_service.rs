use async_trait::async_trait;

use crate::settings::application::{
    domain::entities::SiteSettings,
    ports::{
        incoming::use_cases::{SaveSettingsError, SaveSettingsUseCase},
        outgoing::SettingsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SaveSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    repository: R,
}

impl<R> SaveSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SaveSettingsUseCase for SaveSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    async fn execute(&self, settings: SiteSettings) -> Result<SiteSettings, SaveSettingsError> {
        settings.validate()?;

        self.repository
            .save(&settings)
            .await
            .map_err(|e| SaveSettingsError::RepositoryError(e.to_string()))?;

        Ok(settings)
    }
}
