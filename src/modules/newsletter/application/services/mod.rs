mod list_subscribers_service;
mod prompt_service;
mod subscribe_service;

pub use list_subscribers_service::ListSubscribersService;
pub use prompt_service::{MarkPromptShownService, PromptStatusService};
pub use subscribe_service::SubscribeService;
