use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::validation::email_local_part;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<UserId> for Uuid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered account as it is persisted under `users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Always lower-cased.
    pub email: String,
    /// Argon2 PHC string.
    pub password: String,
    pub username: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Everything needed to create a user except the facts only the store
/// knows at insert time.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// The first account ever registered becomes the administrator.
    pub fn into_user(self, is_first_user: bool) -> User {
        let email = self.email.to_lowercase();
        let username = email_local_part(&email).to_string();

        User {
            id: UserId::new(),
            first_name: self.first_name,
            last_name: self.last_name,
            email,
            password: self.password_hash,
            username,
            phone: String::new(),
            address: String::new(),
            country: String::new(),
            is_admin: is_first_user,
            created_at: Utc::now(),
        }
    }
}

/// Optional profile edits. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
}

impl ProfileChanges {
    pub fn apply_to(self, user: &mut User) {
        if let Some(v) = self.first_name {
            user.first_name = v;
        }
        if let Some(v) = self.last_name {
            user.last_name = v;
        }
        if let Some(v) = self.email {
            user.email = v.to_lowercase();
        }
        if let Some(v) = self.username {
            user.username = v;
        }
        if let Some(v) = self.phone {
            user.phone = v;
        }
        if let Some(v) = self.address {
            user.address = v;
        }
        if let Some(v) = self.country {
            user.country = v;
        }
    }
}

/// How long a session stays valid when nothing else is configured.
pub const DEFAULT_SESSION_MAX_AGE_HOURS: i64 = 24 * 7;

/// Server-side record behind an auth token, stored under
/// `authToken:<token>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub auth_token: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(auth_token: String, user_id: UserId) -> Self {
        Self {
            auth_token,
            user_id,
            created_at: Utc::now(),
        }
    }

    /// A session older than `max_age` no longer authenticates anyone.
    pub fn is_expired_at(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now - self.created_at >= max_age
    }
}

/// A live session joined with its user.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub auth_token: String,
}
