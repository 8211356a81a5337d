//! Key names of the persisted site state.
//!
//! Same names the site used in browser local storage.

pub const USERS: &str = "users";
pub const AUTH_TOKEN: &str = "authToken";
pub const NEWSLETTER_SUBSCRIBERS: &str = "newsletterSubscribers";
pub const NEWSLETTER_MODAL_LAST_SHOWN: &str = "newsletterModalLastShown";
pub const CONTACT_SUBMISSIONS: &str = "contactSubmissions";
pub const SITE_SETTINGS: &str = "siteSettings";
pub const BLOG_POSTS: &str = "blogPosts";

/// Sessions are stored one per token, under `authToken:<token>`. The
/// `currentUser` of a session is always read back from `users`.
pub fn session_key(token: &str) -> String {
    format!("{}{token}", session_key_prefix())
}

/// Shared prefix of every session key.
pub fn session_key_prefix() -> String {
    format!("{AUTH_TOKEN}:")
}
