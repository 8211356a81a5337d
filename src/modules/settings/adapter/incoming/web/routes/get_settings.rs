use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    settings::application::domain::entities::SiteSettings,
    shared::api::ApiResponse,
    AppState,
};

/// Current site branding
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "settings",
    responses(
        (status = 200, description = "Stored settings or defaults", body = inline(SuccessResponse<SiteSettings>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/settings")]
pub async fn get_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.settings.get.execute().await {
        Ok(settings) => ApiResponse::success(settings),
        Err(e) => {
            error!(error = %e, "Failed to read site settings");
            ApiResponse::internal_error()
        }
    }
}
