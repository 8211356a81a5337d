use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::validation::same_email;

/// One newsletter signup, as stored under `newsletterSubscribers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    /// Always lower-cased.
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

impl Subscriber {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            subscribed_at: Utc::now(),
        }
    }

    pub fn matches(&self, email: &str) -> bool {
        same_email(&self.email, email)
    }
}
