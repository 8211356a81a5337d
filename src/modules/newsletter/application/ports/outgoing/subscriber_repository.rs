use async_trait::async_trait;

use crate::newsletter::application::domain::entities::Subscriber;
use crate::shared::storage::StoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscriberRepositoryError {
    #[error("This email is already subscribed to our newsletter")]
    AlreadySubscribed,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Appends the subscriber unless the email (ignoring case) is present.
    async fn add(&self, subscriber: Subscriber) -> Result<Subscriber, SubscriberRepositoryError>;

    /// All subscribers in subscription order.
    async fn list(&self) -> Result<Vec<Subscriber>, SubscriberRepositoryError>;
}
