mod settings_repository_store;

pub use settings_repository_store::SettingsRepositoryStore;
