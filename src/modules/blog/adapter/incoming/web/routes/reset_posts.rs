use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    blog::application::{domain::entities::BlogPost, ports::incoming::use_cases::ResetPostsError},
    shared::api::ApiResponse,
    AppState,
};

/// Restore the built-in posts (admin)
#[utoipa::path(
    delete,
    path = "/api/blog/posts",
    tag = "blog",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Built-in posts restored", body = inline(SuccessResponse<Vec<BlogPost>>)),
        (status = 401, description = "No user logged in", body = ErrorResponse),
        (status = 403, description = "Administrator access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/blog/posts")]
pub async fn reset_posts_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.blog.reset.execute().await {
        Ok(posts) => {
            info!(user_id = %admin.user.id, "Blog posts reset");
            ApiResponse::success(posts)
        }
        Err(ResetPostsError::RepositoryError(msg)) => {
            error!("Failed to reset blog posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
