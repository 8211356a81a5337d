use std::sync::Arc;

use crate::contact::application::ports::incoming::use_cases::{
    ListSubmissionsUseCase, SubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub list_submissions: Arc<dyn ListSubmissionsUseCase + Send + Sync>,
}
