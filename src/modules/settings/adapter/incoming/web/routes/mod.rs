mod get_settings;
mod save_settings;

pub use get_settings::get_settings_handler;
pub use save_settings::save_settings_handler;
pub use get_settings::__path_get_settings_handler;
pub use save_settings::__path_save_settings_handler;
