use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    blog::application::{
        domain::entities::PostPage,
        ports::incoming::use_cases::{ListPostsError, PageQuery},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsQuery {
    /// Number of posts to skip
    pub offset: Option<usize>,
    /// Page size, 6 by default and at most 50
    pub limit: Option<usize>,
}

impl From<ListPostsQuery> for PageQuery {
    fn from(q: ListPostsQuery) -> Self {
        PageQuery::new(q.offset, q.limit)
    }
}

/// List blog posts
///
/// Posts come without their HTML body; `hasMore` drives the "load more"
/// button.
#[utoipa::path(
    get,
    path = "/api/blog/posts",
    tag = "blog",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "One page of posts", body = inline(SuccessResponse<PostPage>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/blog/posts")]
pub async fn list_posts_handler(
    query: web::Query<ListPostsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.list.execute(query.into_inner().into()).await {
        Ok(page) => ApiResponse::success(page),
        Err(ListPostsError::RepositoryError(msg)) => {
            error!("Failed to list blog posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
