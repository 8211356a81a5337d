mod submission_repository_store;

pub use submission_repository_store::SubmissionRepositoryStore;
