pub mod domain;
pub mod newsletter_use_cases;
pub mod ports;
pub mod services;
