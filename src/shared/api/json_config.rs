// src/shared/api/json_config.rs
use crate::shared::api::{ApiResponse, ErrorCode};
use actix_web::web::JsonConfig;

/// Large enough for a 2 MiB logo sent as a base64 data URL.
pub const MAX_JSON_PAYLOAD_BYTES: usize = 4 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::error(ErrorCode::ValidationError, &message),
            )
            .into()
        })
}
