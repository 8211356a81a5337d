use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::dto::MessageResponse;
use crate::auth::adapter::incoming::web::extractors::auth::{AuthenticatedUser, NO_USER_MESSAGE};
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordInput,
};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;
use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[schema(example = "newsecret")]
    pub new_password: String,
    #[schema(example = "newsecret")]
    pub confirm_password: String,
    /// The user ticked "I want to change my password"
    #[schema(example = true)]
    pub confirmed: bool,
}

/// Change own password
#[utoipa::path(
    put,
    path = "/api/users/me/password",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = inline(SuccessResponse<MessageResponse>)),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "You must confirm the password change"
                }
            })
        ),
        (status = 401, description = "No user logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/me/password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    payload: web::Json<ChangePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();
    let user_id = user.user.id;

    let input = ChangePasswordInput {
        user_id,
        new_password: dto.new_password,
        confirm_password: dto.confirm_password,
        confirmed: dto.confirmed,
    };

    match data.change_password_use_case.execute(input).await {
        Ok(_) => {
            info!(user_id = %user_id, "Password changed");
            ApiResponse::success(MessageResponse {
                message: "Your password has been changed successfully".to_string(),
            })
        }
        Err(e) => map_change_password_error(e),
    }
}

fn map_change_password_error(err: ChangePasswordError) -> HttpResponse {
    match err {
        ChangePasswordError::NotConfirmed
        | ChangePasswordError::MissingFields
        | ChangePasswordError::PasswordMismatch
        | ChangePasswordError::PasswordTooShort => {
            warn!(reason = %err, "Password change rejected");
            ApiResponse::error(ErrorCode::ValidationError, &err.to_string())
        }
        ChangePasswordError::UserNotFound => {
            ApiResponse::error(ErrorCode::Unauthorized, NO_USER_MESSAGE)
        }
        ChangePasswordError::HashingFailed(ref e) | ChangePasswordError::RepositoryError(ref e) => {
            error!(error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}
