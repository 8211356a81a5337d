use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::UserId,
    ports::outgoing::{TokenClaims, TokenError, TokenProvider},
};

/// Opaque tokens of the form `base64("<user id>:<issued at millis>")`.
///
/// Nothing is signed. A token only grants access while a session record
/// exists for it.
#[derive(Debug, Clone, Default)]
pub struct Base64TokenProvider;

impl Base64TokenProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TokenProvider for Base64TokenProvider {
    fn issue_token(&self, user_id: UserId) -> String {
        STANDARD.encode(format!("{}:{}", user_id, Utc::now().timestamp_millis()))
    }

    fn decode_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let bytes = STANDARD
            .decode(token.trim())
            .map_err(|_| TokenError::MalformedToken)?;
        let raw = String::from_utf8(bytes).map_err(|_| TokenError::MalformedToken)?;

        let (user_id, issued_at) = raw.split_once(':').ok_or(TokenError::MalformedToken)?;

        let user_id = Uuid::parse_str(user_id).map_err(|_| TokenError::MalformedToken)?;
        let issued_at_millis = issued_at
            .parse::<i64>()
            .map_err(|_| TokenError::MalformedToken)?;

        Ok(TokenClaims {
            user_id: user_id.into(),
            issued_at_millis,
        })
    }
}
