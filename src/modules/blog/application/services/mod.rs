mod get_post_service;
mod list_posts_service;
mod replace_posts_service;
mod reset_posts_service;

pub use get_post_service::GetPostService;
pub use list_posts_service::ListPostsService;
pub use replace_posts_service::ReplacePostsService;
pub use reset_posts_service::ResetPostsService;
