mod prompt_repository_store;
mod subscriber_repository_store;

pub use prompt_repository_store::PromptRepositoryStore;
pub use subscriber_repository_store::SubscriberRepositoryStore;
