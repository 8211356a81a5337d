use async_trait::async_trait;

use crate::settings::application::{
    domain::entities::SiteSettings,
    ports::{
        incoming::use_cases::{GetSettingsError, GetSettingsUseCase},
        outgoing::SettingsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct GetSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSettingsUseCase for GetSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SiteSettings, GetSettingsError> {
        self.repository
            .load()
            .await
            .map(Option::unwrap_or_default)
            .map_err(|e| GetSettingsError::RepositoryError(e.to_string()))
    }
}
