pub mod domain;
pub mod ports;
pub mod services;
pub mod settings_use_cases;
