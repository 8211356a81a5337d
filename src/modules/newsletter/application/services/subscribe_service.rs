use async_trait::async_trait;

use crate::newsletter::application::{
    domain::entities::Subscriber,
    ports::{
        incoming::use_cases::{SubscribeCommand, SubscribeError, SubscribeUseCase},
        outgoing::{SubscriberRepository, SubscriberRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct SubscribeService<R>
where
    R: SubscriberRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubscribeService<R>
where
    R: SubscriberRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubscribeUseCase for SubscribeService<R>
where
    R: SubscriberRepository + Send + Sync,
{
    async fn execute(&self, command: SubscribeCommand) -> Result<Subscriber, SubscribeError> {
        self.repository
            .add(Subscriber::new(command.email()))
            .await
            .map_err(|e| match e {
                SubscriberRepositoryError::AlreadySubscribed => SubscribeError::AlreadySubscribed,
                other => SubscribeError::RepositoryError(other.to_string()),
            })
    }
}
