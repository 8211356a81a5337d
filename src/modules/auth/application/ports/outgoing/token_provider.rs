use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Malformed token")]
    MalformedToken,
}

/// What an auth token asserts. Tokens are not signed, so these claims are
/// only trusted together with a stored session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: UserId,
    pub issued_at_millis: i64,
}

pub trait TokenProvider: Send + Sync {
    fn issue_token(&self, user_id: UserId) -> String;
    fn decode_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
