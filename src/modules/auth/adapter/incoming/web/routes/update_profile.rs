use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::dto::UserProfile;
use crate::auth::adapter::incoming::web::extractors::auth::{AuthenticatedUser, NO_USER_MESSAGE};
use crate::auth::application::domain::entities::ProfileChanges;
use crate::auth::application::use_cases::update_profile::{UpdateUserError, UpdateUserInput};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;
use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Profile fields a user may edit. Anything else in the body (`isAdmin`,
/// `password`, ...) is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    pub username: Option<String>,
    /// Digits only
    #[schema(example = "0612345678")]
    pub phone: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
}

impl From<UpdateUserRequest> for ProfileChanges {
    fn from(dto: UpdateUserRequest) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            username: dto.username,
            phone: dto.phone,
            address: dto.address,
            country: dto.country,
        }
    }
}

/// Update own profile
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<UserProfile>)),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Phone number must contain only digits"
                }
            })
        ),
        (status = 401, description = "No user logged in", body = ErrorResponse),
        (status = 409, description = "Email belongs to another account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/me")]
pub async fn update_user_profile_handler(
    user: AuthenticatedUser,
    payload: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.user.id;
    let input = UpdateUserInput {
        user_id,
        changes: payload.into_inner().into(),
    };

    match data.update_user_profile_use_case.execute(input).await {
        Ok(updated) => {
            info!(user_id = %user_id, "Profile updated");
            ApiResponse::success(UserProfile::from(updated))
        }
        Err(e) => map_update_error(e),
    }
}

fn map_update_error(err: UpdateUserError) -> HttpResponse {
    match err {
        UpdateUserError::InvalidEmail | UpdateUserError::InvalidPhone => {
            warn!(reason = %err, "Profile update rejected");
            ApiResponse::error(ErrorCode::ValidationError, &err.to_string())
        }
        UpdateUserError::EmailAlreadyExists => {
            ApiResponse::error(ErrorCode::EmailAlreadyExists, &err.to_string())
        }
        UpdateUserError::UserNotFound => {
            ApiResponse::error(ErrorCode::Unauthorized, NO_USER_MESSAGE)
        }
        UpdateUserError::RepositoryError(ref e) => {
            error!(error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
