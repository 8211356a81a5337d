use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AuthenticatedSession, User};

/// A user as returned by the API. The password hash never leaves the
/// server.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "jane")]
    pub username: String,
    pub phone: String,
    pub address: String,
    pub country: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            username: user.username,
            phone: user.phone,
            address: user.address,
            country: user.country,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthSessionResponse {
    pub user: UserProfile,
    /// Send back as `Authorization: Bearer <authToken>`.
    pub auth_token: String,
}

impl From<AuthenticatedSession> for AuthSessionResponse {
    fn from(session: AuthenticatedSession) -> Self {
        Self {
            user: session.user.into(),
            auth_token: session.auth_token,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Your password has been changed successfully")]
    pub message: String,
}
