use actix_web::{put, web, Responder};
use tracing::{error, info, warn};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    blog::application::{domain::entities::BlogPost, ports::incoming::use_cases::ReplacePostsError},
    shared::api::{ApiResponse, ErrorCode},
    AppState,
};

/// Replace the published posts (admin)
#[utoipa::path(
    put,
    path = "/api/blog/posts",
    tag = "blog",
    security(("bearer_auth" = [])),
    request_body = Vec<BlogPost>,
    responses(
        (status = 200, description = "Posts replaced", body = inline(SuccessResponse<Vec<BlogPost>>)),
        (status = 400, description = "Missing, malformed or duplicate slug", body = ErrorResponse),
        (status = 401, description = "No user logged in", body = ErrorResponse),
        (status = 403, description = "Administrator access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/blog/posts")]
pub async fn replace_posts_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<Vec<BlogPost>>,
) -> impl Responder {
    match data.blog.replace.execute(payload.into_inner()).await {
        Ok(posts) => {
            info!(user_id = %admin.user.id, count = posts.len(), "Blog posts replaced");
            ApiResponse::success(posts)
        }
        Err(ReplacePostsError::Invalid(e)) => {
            warn!(reason = %e, "Blog post list rejected");
            ApiResponse::error(ErrorCode::ValidationError, &e.to_string())
        }
        Err(ReplacePostsError::RepositoryError(msg)) => {
            error!("Failed to store blog posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
