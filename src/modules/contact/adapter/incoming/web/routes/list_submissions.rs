use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    contact::application::domain::entities::ContactSubmission,
    shared::api::ApiResponse,
    AppState,
};

/// List contact form messages (admin)
#[utoipa::path(
    get,
    path = "/api/contact/submissions",
    tag = "contact",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Messages in the order received", body = inline(SuccessResponse<Vec<ContactSubmission>>)),
        (status = 401, description = "No user logged in", body = ErrorResponse),
        (status = 403, description = "Administrator access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/contact/submissions")]
pub async fn list_submissions_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.list_submissions.execute().await {
        Ok(submissions) => ApiResponse::success(submissions),
        Err(e) => {
            error!(error = %e, "Failed to list contact messages");
            ApiResponse::internal_error()
        }
    }
}
