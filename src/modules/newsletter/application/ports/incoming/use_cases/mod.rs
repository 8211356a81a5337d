mod list_subscribers_use_case;
mod newsletter_prompt_use_case;
mod subscribe_use_case;

pub use list_subscribers_use_case::{ListSubscribersError, ListSubscribersUseCase};
pub use newsletter_prompt_use_case::{
    MarkPromptShownUseCase, PromptError, PromptStatus, PromptStatusUseCase,
};
pub use subscribe_use_case::{SubscribeCommand, SubscribeCommandError, SubscribeError, SubscribeUseCase};
