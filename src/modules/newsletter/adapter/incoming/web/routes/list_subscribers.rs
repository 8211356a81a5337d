use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    newsletter::application::domain::entities::Subscriber,
    shared::api::ApiResponse,
    AppState,
};

/// List newsletter subscribers (admin)
#[utoipa::path(
    get,
    path = "/api/newsletter/subscribers",
    tag = "newsletter",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Subscribers in subscription order", body = inline(SuccessResponse<Vec<Subscriber>>)),
        (status = 401, description = "No user logged in", body = ErrorResponse),
        (status = 403, description = "Administrator access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/newsletter/subscribers")]
pub async fn list_subscribers_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.newsletter.list_subscribers.execute().await {
        Ok(subscribers) => ApiResponse::success(subscribers),
        Err(e) => {
            error!(error = %e, "Failed to list subscribers");
            ApiResponse::internal_error()
        }
    }
}
