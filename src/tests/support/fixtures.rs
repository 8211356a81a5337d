use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};

/// The only token the stub session resolver accepts.
pub const TEST_TOKEN: &str = "test-auth-token";

pub const SAMPLE_USER_ID: Uuid = Uuid::from_u128(0x5a1e_0000_0000_4000_8000_0000_0000_0001);

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {TEST_TOKEN}"))
}

pub fn sample_user(is_admin: bool) -> User {
    User {
        id: UserId::from(SAMPLE_USER_ID),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@example.com".to_string(),
        password: "$argon2id$v=19$m=4096,t=3,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        username: "jane".to_string(),
        phone: String::new(),
        address: String::new(),
        country: String::new(),
        is_admin,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap(),
    }
}
