use async_trait::async_trait;

use crate::newsletter::application::{
    domain::entities::Subscriber,
    ports::{
        incoming::use_cases::{ListSubscribersError, ListSubscribersUseCase},
        outgoing::SubscriberRepository,
    },
};

#[derive(Debug, Clone)]
pub struct ListSubscribersService<R>
where
    R: SubscriberRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListSubscribersService<R>
where
    R: SubscriberRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListSubscribersUseCase for ListSubscribersService<R>
where
    R: SubscriberRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Subscriber>, ListSubscribersError> {
        self.repository
            .list()
            .await
            .map_err(|e| ListSubscribersError::RepositoryError(e.to_string()))
    }
}
