mod list_subscribers;
mod prompt;
mod subscribe;

pub use list_subscribers::list_subscribers_handler;
pub use prompt::{mark_prompt_shown_handler, prompt_status_handler};
pub use subscribe::{subscribe_handler, SubscribeRequest};
pub use list_subscribers::__path_list_subscribers_handler;
pub use prompt::__path_mark_prompt_shown_handler;
pub use prompt::__path_prompt_status_handler;
pub use subscribe::__path_subscribe_handler;
