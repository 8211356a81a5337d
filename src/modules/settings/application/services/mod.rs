mod get_settings_service;
mod save_settings_service;

pub use get_settings_service::GetSettingsService;
pub use save_settings_service::SaveSettingsService;
