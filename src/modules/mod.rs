pub mod auth;
pub mod blog;
pub mod contact;
pub mod newsletter;
pub mod settings;
