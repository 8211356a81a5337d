use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::dto::UserProfile;
use crate::auth::adapter::incoming::web::extractors::auth::{AuthenticatedUser, OptionalUser};
use crate::shared::api::ApiResponse;

/// What the site header and guarded pages need to know about the caller.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSessionResponse {
    pub current_user: Option<UserProfile>,
    pub auth_token: Option<String>,
    pub is_authenticated: bool,
    pub is_admin: bool,
}

impl From<Option<AuthenticatedUser>> for CurrentSessionResponse {
    fn from(user: Option<AuthenticatedUser>) -> Self {
        match user {
            Some(AuthenticatedUser { user, auth_token }) => Self {
                is_authenticated: true,
                is_admin: user.is_admin,
                current_user: Some(user.into()),
                auth_token: Some(auth_token),
            },
            None => Self {
                current_user: None,
                auth_token: None,
                is_authenticated: false,
                is_admin: false,
            },
        }
    }
}

/// Current session
///
/// A missing or stale token reads as logged out. Only a failed session
/// lookup is an error.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security((), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session state", body = inline(SuccessResponse<CurrentSessionResponse>)),
        (status = 500, description = "Session lookup failed", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn current_session_handler(caller: OptionalUser) -> impl Responder {
    ApiResponse::success(CurrentSessionResponse::from(caller.0))
}
