mod get_post;
mod list_posts;
mod replace_posts;
mod reset_posts;

pub use get_post::get_post_handler;
pub use list_posts::{list_posts_handler, ListPostsQuery};
pub use replace_posts::replace_posts_handler;
pub use reset_posts::reset_posts_handler;
pub use get_post::__path_get_post_handler;
pub use list_posts::__path_list_posts_handler;
pub use replace_posts::__path_replace_posts_handler;
pub use reset_posts::__path_reset_posts_handler;
