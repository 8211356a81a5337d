use std::sync::Arc;

use crate::settings::application::ports::incoming::use_cases::{
    GetSettingsUseCase, SaveSettingsUseCase,
};

#[derive(Clone)]
pub struct SettingsUseCases {
    pub get: Arc<dyn GetSettingsUseCase + Send + Sync>,
    pub save: Arc<dyn SaveSettingsUseCase + Send + Sync>,
}
