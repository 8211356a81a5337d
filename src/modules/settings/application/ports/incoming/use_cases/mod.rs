use async_trait::async_trait;

use crate::settings::application::domain::entities::{SettingsValidationError, SiteSettings};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSettingsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSettingsUseCase: Send + Sync {
    /// The stored settings, or the defaults when none were saved.
    async fn execute(&self) -> Result<SiteSettings, GetSettingsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveSettingsError {
    #[error(transparent)]
    Invalid(#[from] SettingsValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SaveSettingsUseCase: Send + Sync {
    async fn execute(&self, settings: SiteSettings) -> Result<SiteSettings, SaveSettingsError>;
}
