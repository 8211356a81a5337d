use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::{error, warn};

use crate::auth::application::{
    domain::entities::User, use_cases::resolve_session::ResolveSessionError,
};
use crate::{
    shared::api::{ApiResponse, ErrorCode},
    AppState,
};

pub const NO_USER_MESSAGE: &str = "No user logged in";
pub const ADMIN_REQUIRED_MESSAGE: &str = "Administrator access required";

/// The caller behind a live session.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub auth_token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn not_logged_in() -> ActixError {
    create_api_error(ApiResponse::error(ErrorCode::Unauthorized, NO_USER_MESSAGE))
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;
            let token = token.ok_or_else(not_logged_in)?;

            lookup_session(&state, &token).await?.ok_or_else(not_logged_in)
        })
    }
}

/// The caller if logged in. A missing or stale token reads as anonymous,
/// but a failed session lookup is still a server error.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;
            let Some(token) = token else {
                return Ok(OptionalUser(None));
            };

            lookup_session(&state, &token).await.map(OptionalUser)
        })
    }
}

async fn lookup_session(
    state: &AppState,
    token: &str,
) -> Result<Option<AuthenticatedUser>, ActixError> {
    match state.resolve_session_use_case.execute(token).await {
        Ok(session) => Ok(Some(AuthenticatedUser {
            user: session.user,
            auth_token: session.auth_token,
        })),
        Err(ResolveSessionError::InvalidToken) => Ok(None),
        Err(ResolveSessionError::RepositoryError(e)) => {
            error!(error = %e, "Session lookup failed");
            Err(create_api_error(ApiResponse::internal_error()))
        }
    }
}

/// An authenticated caller whose account is the administrator.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user: User,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let authenticated = AuthenticatedUser::from_request(req, payload);

        Box::pin(async move {
            let AuthenticatedUser { user, .. } = authenticated.await?;

            if !user.is_admin {
                warn!(user_id = %user.id, "Admin operation refused");
                return Err(create_api_error(ApiResponse::error(
                    ErrorCode::AdminRequired,
                    ADMIN_REQUIRED_MESSAGE,
                )));
            }

            Ok(AdminUser { user })
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
