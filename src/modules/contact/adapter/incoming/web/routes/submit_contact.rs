use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    contact::application::{
        domain::entities::ContactSubmission,
        ports::incoming::use_cases::{SubmitContactCommand, SubmitContactError},
    },
    shared::api::{ApiResponse, ErrorCode},
    AppState,
};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SubmitContactRequest {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "I need a new website for my bakery.")]
    pub message: String,
}

/// Send a message through the contact form
#[utoipa::path(
    post,
    path = "/api/contact/submissions",
    tag = "contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 201, description = "Message received", body = inline(SuccessResponse<ContactSubmission>)),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Please fill in all fields"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/contact/submissions")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubmitContactRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match SubmitContactCommand::new(dto.name, dto.email, dto.message) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::error(ErrorCode::ValidationError, &err.to_string()),
    };

    match data.contact.submit.execute(command).await {
        Ok(submission) => {
            info!(email = %submission.email, "Contact message received");
            ApiResponse::created(submission)
        }
        Err(SubmitContactError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to store contact message");
            ApiResponse::internal_error()
        }
    }
}
