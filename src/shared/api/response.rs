use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Machine-readable `error.code` values. Each code fixes its HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    InvalidCredentials,
    Unauthorized,
    AdminRequired,
    PostNotFound,
    EmailAlreadyExists,
    AlreadySubscribed,
    InternalError,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::InvalidCredentials | ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::AdminRequired => StatusCode::FORBIDDEN,
            ErrorCode::PostNotFound => StatusCode::NOT_FOUND,
            ErrorCode::EmailAlreadyExists | ErrorCode::AlreadySubscribed => StatusCode::CONFLICT,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The `{ success, data | error }` envelope every endpoint answers with.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct ApiError {
    pub code: ErrorCode,
    /// Shown to the visitor as is.
    #[schema(example = "Please enter a valid email address")]
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        Self::with_data(StatusCode::OK, data)
    }

    pub fn created(data: T) -> HttpResponse {
        Self::with_data(StatusCode::CREATED, data)
    }

    fn with_data(status: StatusCode, data: T) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(code: ErrorCode, message: &str) -> HttpResponse {
        HttpResponse::build(code.status()).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code,
                message: message.to_string(),
            }),
        })
    }

    /// Storage and hashing failures; details stay in the logs.
    pub fn internal_error() -> HttpResponse {
        Self::error(ErrorCode::InternalError, "An unexpected error occurred")
    }
}
