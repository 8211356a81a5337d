use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::use_cases::logout_user::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info};

/// Logout
///
/// Closes the caller's session. The token is rejected afterwards.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Session closed"),
        (status = 401, description = "No user logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.logout_user_use_case.execute(&user.auth_token).await {
        Ok(()) => {
            info!(user_id = %user.user.id, "User logged out successfully");
            ApiResponse::no_content()
        }

        Err(LogoutError::SessionRemovalFailed(ref e)) => {
            error!(error = %e, "Session removal failed during logout");
            ApiResponse::internal_error()
        }
    }
}
