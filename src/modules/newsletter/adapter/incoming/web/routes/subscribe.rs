use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    newsletter::application::{
        domain::entities::Subscriber,
        ports::incoming::use_cases::{SubscribeCommand, SubscribeCommandError, SubscribeError},
    },
    shared::api::{ApiResponse, ErrorCode},
    AppState,
};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SubscribeRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,
}

/// Subscribe to the newsletter
#[utoipa::path(
    post,
    path = "/api/newsletter/subscribers",
    tag = "newsletter",
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscribed", body = inline(SuccessResponse<Subscriber>)),
        (status = 400, description = "Missing or invalid email", body = ErrorResponse),
        (
            status = 409,
            description = "Already subscribed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ALREADY_SUBSCRIBED",
                    "message": "This email is already subscribed to our newsletter"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/newsletter/subscribers")]
pub async fn subscribe_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubscribeRequest>,
) -> impl Responder {
    let command = match SubscribeCommand::new(payload.into_inner().email) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.newsletter.subscribe.execute(command).await {
        Ok(subscriber) => {
            info!(email = %subscriber.email, "Newsletter subscription added");
            ApiResponse::created(subscriber)
        }
        Err(err) => map_subscribe_error(err),
    }
}

fn map_command_error(err: SubscribeCommandError) -> HttpResponse {
    ApiResponse::error(ErrorCode::ValidationError, &err.to_string())
}

fn map_subscribe_error(err: SubscribeError) -> HttpResponse {
    match err {
        SubscribeError::AlreadySubscribed => {
            ApiResponse::error(ErrorCode::AlreadySubscribed, &err.to_string())
        }
        SubscribeError::RepositoryError(ref e) => {
            error!(error = %e, "Failed to store subscriber");
            ApiResponse::internal_error()
        }
    }
}
