use async_trait::async_trait;

use crate::newsletter::application::{
    domain::entities::Subscriber,
    ports::outgoing::{SubscriberRepository, SubscriberRepositoryError},
};
use crate::shared::storage::{keys, StateStore};

#[derive(Clone)]
pub struct SubscriberRepositoryStore {
    store: StateStore,
}

impl SubscriberRepositoryStore {
    pub fn new(store: StateStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubscriberRepository for SubscriberRepositoryStore {
    async fn add(&self, subscriber: Subscriber) -> Result<Subscriber, SubscriberRepositoryError> {
        self.store
            .update(
                keys::NEWSLETTER_SUBSCRIBERS,
                move |subscribers: &mut Vec<Subscriber>| {
                    if subscribers.iter().any(|s| s.matches(&subscriber.email)) {
                        return Err(SubscriberRepositoryError::AlreadySubscribed);
                    }

                    subscribers.push(subscriber.clone());
                    Ok(subscriber)
                },
            )
            .await
    }

    async fn list(&self) -> Result<Vec<Subscriber>, SubscriberRepositoryError> {
        Ok(self
            .store
            .read_or_default(keys::NEWSLETTER_SUBSCRIBERS)
            .await?)
    }
}
