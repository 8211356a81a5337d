mod prompt_repository;
mod subscriber_repository;

pub use prompt_repository::{PromptRepository, PromptRepositoryError};
pub use subscriber_repository::{SubscriberRepository, SubscriberRepositoryError};
