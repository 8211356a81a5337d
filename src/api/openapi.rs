use crate::api::schemas::ErrorResponse;
use crate::shared::api::{ApiError, ErrorCode};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::dto::{AuthSessionResponse, MessageResponse, UserProfile};
use crate::auth::adapter::incoming::web::routes::{
    ChangePasswordRequest, CurrentSessionResponse, LoginRequestDto, RegisterUserRequest,
    UpdateUserRequest,
};
// Newsletter
use crate::newsletter::adapter::incoming::web::routes::SubscribeRequest;
use crate::newsletter::application::domain::entities::Subscriber;
use crate::newsletter::application::ports::incoming::use_cases::PromptStatus;
// Contact
use crate::contact::adapter::incoming::web::routes::SubmitContactRequest;
use crate::contact::application::domain::entities::ContactSubmission;
// Settings
use crate::settings::application::domain::entities::SiteSettings;
// Blog
use crate::blog::application::domain::entities::{BlogPost, BlogPostSummary, PostDetail, PostPage};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Agency Site API",
        version = "1.0.0",
        description = "Accounts, sessions, newsletter, contact form, branding and blog content for the agency marketing site",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::current_session_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::update_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::change_password_handler,

        // Newsletter endpoints
        crate::newsletter::adapter::incoming::web::routes::subscribe_handler,
        crate::newsletter::adapter::incoming::web::routes::list_subscribers_handler,
        crate::newsletter::adapter::incoming::web::routes::prompt_status_handler,
        crate::newsletter::adapter::incoming::web::routes::mark_prompt_shown_handler,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,
        crate::contact::adapter::incoming::web::routes::list_submissions_handler,

        // Settings endpoints
        crate::settings::adapter::incoming::web::routes::get_settings_handler,
        crate::settings::adapter::incoming::web::routes::save_settings_handler,

        // Blog endpoints
        crate::blog::adapter::incoming::web::routes::list_posts_handler,
        crate::blog::adapter::incoming::web::routes::get_post_handler,
        crate::blog::adapter::incoming::web::routes::replace_posts_handler,
        crate::blog::adapter::incoming::web::routes::reset_posts_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ApiError,
            ErrorCode,

            // Auth DTOs
            RegisterUserRequest,
            LoginRequestDto,
            UpdateUserRequest,
            ChangePasswordRequest,
            AuthSessionResponse,
            CurrentSessionResponse,
            UserProfile,
            MessageResponse,

            // Newsletter
            SubscribeRequest,
            Subscriber,
            PromptStatus,

            // Contact
            SubmitContactRequest,
            ContactSubmission,

            // Settings
            SiteSettings,

            // Blog
            BlogPost,
            BlogPostSummary,
            PostPage,
            PostDetail,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and sessions"),
        (name = "users", description = "Profile and password of the logged-in user"),
        (name = "newsletter", description = "Newsletter subscriptions and signup prompt"),
        (name = "contact", description = "Contact form submissions"),
        (name = "settings", description = "Site branding"),
        (name = "blog", description = "Blog posts"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Paste the authToken returned by login or register"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/api/auth/register",
            "/api/auth/login",
            "/api/auth/logout",
            "/api/auth/session",
            "/api/users/me",
            "/api/users/me/password",
            "/api/newsletter/subscribers",
            "/api/newsletter/prompt",
            "/api/contact/submissions",
            "/api/settings",
            "/api/blog/posts",
            "/api/blog/posts/{slug}",
        ] {
            assert!(paths.contains(&path), "{path} missing from OpenAPI doc");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn error_codes_are_documented() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let codes = doc["components"]["schemas"]["ErrorCode"]["enum"]
            .as_array()
            .expect("ErrorCode enum");

        for code in ["VALIDATION_ERROR", "ADMIN_REQUIRED", "EMAIL_ALREADY_EXISTS"] {
            assert!(codes.contains(&serde_json::json!(code)), "{code} not documented");
        }
    }
}
