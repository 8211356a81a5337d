mod post_repository_store;

pub use post_repository_store::PostRepositoryStore;
