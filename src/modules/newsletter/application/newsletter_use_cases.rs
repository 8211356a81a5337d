use std::sync::Arc;

use crate::newsletter::application::ports::incoming::use_cases::{
    ListSubscribersUseCase, MarkPromptShownUseCase, PromptStatusUseCase, SubscribeUseCase,
};

#[derive(Clone)]
pub struct NewsletterUseCases {
    pub subscribe: Arc<dyn SubscribeUseCase + Send + Sync>,
    pub list_subscribers: Arc<dyn ListSubscribersUseCase + Send + Sync>,
    pub prompt_status: Arc<dyn PromptStatusUseCase + Send + Sync>,
    pub mark_prompt_shown: Arc<dyn MarkPromptShownUseCase + Send + Sync>,
}
