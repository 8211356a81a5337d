use async_trait::async_trait;

use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::outgoing::{SubmissionRepository, SubmissionRepositoryError},
};
use crate::shared::storage::{keys, StateStore};

#[derive(Clone)]
pub struct SubmissionRepositoryStore {
    store: StateStore,
}

impl SubmissionRepositoryStore {
    pub fn new(store: StateStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubmissionRepository for SubmissionRepositoryStore {
    async fn append(&self, submission: ContactSubmission) -> Result<(), SubmissionRepositoryError> {
        self.store
            .update(
                keys::CONTACT_SUBMISSIONS,
                move |submissions: &mut Vec<ContactSubmission>| {
                    submissions.push(submission);
                    Ok::<_, SubmissionRepositoryError>(())
                },
            )
            .await
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>, SubmissionRepositoryError> {
        Ok(self.store.read_or_default(keys::CONTACT_SUBMISSIONS).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn stored_as_camel_case_array() {
        let store = StateStore::in_memory();
        let repo = SubmissionRepositoryStore::new(store.clone());

        repo.append(ContactSubmission {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hi".to_string(),
            submitted_at: Utc::now(),
        })
        .await
        .unwrap();

        let raw: serde_json::Value = store
            .read(keys::CONTACT_SUBMISSIONS)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(raw[0]["name"], "Jane");
        assert!(raw[0]["submittedAt"].is_string());
    }
}
