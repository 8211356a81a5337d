pub mod security;
pub mod session_repository_store;
pub mod token;
pub mod user_repository_store;
