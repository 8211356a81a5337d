use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    blog::application::{domain::entities::PostDetail, ports::incoming::use_cases::GetPostError},
    shared::api::{ApiResponse, ErrorCode},
    AppState,
};

/// A single post with up to three related posts
#[utoipa::path(
    get,
    path = "/api/blog/posts/{slug}",
    tag = "blog",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post found", body = inline(SuccessResponse<PostDetail>)),
        (
            status = 404,
            description = "Unknown slug",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "POST_NOT_FOUND", "message": "Post not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/blog/posts/{slug}")]
pub async fn get_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.blog.get.execute(&slug).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(e @ GetPostError::NotFound) => {
            ApiResponse::error(ErrorCode::PostNotFound, &e.to_string())
        }
        Err(GetPostError::RepositoryError(msg)) => {
            error!(slug = %slug, "Failed to load blog post: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::StateStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::store_backed;
    use actix_web::{test, App};

    async fn get(uri: &str) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_blog(store_backed::blog(&StateStore::in_memory()))
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(get_post_handler)).await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_get_post_with_related() {
        let (status, body) = get("/api/blog/posts/boost-website-speed-2026").await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["post"]["id"], 1);
        assert!(body["data"]["post"]["content"]
            .as_str()
            .unwrap()
            .starts_with("<h2>Introduction</h2>"));

        let related = body["data"]["related"].as_array().unwrap();
        assert_eq!(related.len(), 2);
        assert!(related.iter().all(|p| p["slug"] != "boost-website-speed-2026"));
    }

    #[actix_web::test]
    async fn test_unknown_slug_is_404() {
        let (status, body) = get("/api/blog/posts/missing").await;

        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "POST_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Post not found");
    }
}
