use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::dto::AuthSessionResponse;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "secret1")]
    pub password: String,
}

/// User login
///
/// Authenticates a user with email and password and opens a new session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AuthSessionResponse>)),
        (
            status = 400,
            description = "Missing email or password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Email and password are required"
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::error(ErrorCode::ValidationError, &e.to_string()),
    };

    match data.login_user_use_case.execute(request).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User logged in successfully");
            ApiResponse::success(AuthSessionResponse::from(session))
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::error(ErrorCode::InvalidCredentials, "Invalid email or password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "User lookup failed");
            ApiResponse::internal_error()
        }
    }
}
