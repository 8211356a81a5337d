use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::dto::AuthSessionResponse;
use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserInput};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration. Missing fields read as empty so
/// they are reported by the validation messages.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[schema(example = "Jane")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,

    #[schema(example = "jane@example.com")]
    pub email: String,

    /// At least 6 characters
    #[schema(example = "secret1")]
    pub password: String,

    #[schema(example = "secret1")]
    pub confirm_password: String,

    #[schema(example = true)]
    pub agree_to_terms: bool,
}

impl From<RegisterUserRequest> for RegisterUserInput {
    fn from(dto: RegisterUserRequest) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            password: dto.password,
            confirm_password: dto.confirm_password,
            agree_to_terms: dto.agree_to_terms,
        }
    }
}

/// Register a new account
///
/// The first account ever created becomes the administrator. A session is
/// opened for the new user.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AuthSessionResponse>)),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Passwords do not match"
                }
            })
        ),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_EXISTS",
                    "message": "An account with this email already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    info!(email = %dto.email, "Registration attempt");

    match data.register_user_use_case.execute(dto.into()).await {
        Ok(session) => {
            info!(
                user_id = %session.user.id,
                is_admin = session.user.is_admin,
                "User registered"
            );
            ApiResponse::created(AuthSessionResponse::from(session))
        }
        Err(e) => map_register_error(e),
    }
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::TermsNotAccepted
        | RegisterUserError::MissingFields
        | RegisterUserError::InvalidEmail
        | RegisterUserError::PasswordMismatch
        | RegisterUserError::PasswordTooShort => {
            warn!(reason = %err, "Registration rejected");
            ApiResponse::error(ErrorCode::ValidationError, &err.to_string())
        }
        RegisterUserError::EmailAlreadyExists => {
            warn!("Registration rejected: email taken");
            ApiResponse::error(ErrorCode::EmailAlreadyExists, &err.to_string())
        }
        RegisterUserError::HashingFailed(ref e) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }
        RegisterUserError::RepositoryError(ref e) => {
            error!(error = %e, "Failed to store new user");
            ApiResponse::internal_error()
        }
    }
}
