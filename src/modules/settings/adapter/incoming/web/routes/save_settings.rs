use actix_web::{put, web, Responder};
use tracing::{error, info, warn};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    settings::application::{
        domain::entities::SiteSettings, ports::incoming::use_cases::SaveSettingsError,
    },
    shared::api::{ApiResponse, ErrorCode},
    AppState,
};

/// Replace site branding (admin)
///
/// Settings are overwritten as a whole; omitted fields fall back to their
/// defaults.
#[utoipa::path(
    put,
    path = "/api/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    request_body = SiteSettings,
    responses(
        (status = 200, description = "Settings saved", body = inline(SuccessResponse<SiteSettings>)),
        (
            status = 400,
            description = "Invalid logo or color",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "File size must be less than 2MB"
                }
            })
        ),
        (status = 401, description = "No user logged in", body = ErrorResponse),
        (status = 403, description = "Administrator access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/settings")]
pub async fn save_settings_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<SiteSettings>,
) -> impl Responder {
    match data.settings.save.execute(payload.into_inner()).await {
        Ok(settings) => {
            info!(user_id = %admin.user.id, "Site settings saved");
            ApiResponse::success(settings)
        }
        Err(SaveSettingsError::Invalid(e)) => {
            warn!(reason = %e, "Site settings rejected");
            ApiResponse::error(ErrorCode::ValidationError, &e.to_string())
        }
        Err(SaveSettingsError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to save site settings");
            ApiResponse::internal_error()
        }
    }
}
