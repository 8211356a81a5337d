pub mod password_hasher;
pub mod session_repository;
pub mod token_provider;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use session_repository::{SessionRepository, SessionRepositoryError};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_repository::{UserRepository, UserRepositoryError};
