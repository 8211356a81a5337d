use std::sync::Arc;

use crate::blog::application::ports::incoming::use_cases::{
    GetPostUseCase, ListPostsUseCase, ReplacePostsUseCase, ResetPostsUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub list: Arc<dyn ListPostsUseCase + Send + Sync>,
    pub get: Arc<dyn GetPostUseCase + Send + Sync>,
    pub replace: Arc<dyn ReplacePostsUseCase + Send + Sync>,
    pub reset: Arc<dyn ResetPostsUseCase + Send + Sync>,
}
