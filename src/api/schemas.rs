//! OpenAPI views of the response envelope built by
//! [`ApiResponse`](crate::shared::api::ApiResponse).

use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::ApiError;

/// `{ "success": true, "data": ... }`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{ "success": false, "error": { "code", "message" } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ApiError,
}
