//! Real services over a shared in-memory store, for route tests that need
//! state to survive across requests.

use std::sync::Arc;

use crate::blog::adapter::outgoing::PostRepositoryStore;
use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::blog::application::services::{
    GetPostService, ListPostsService, ReplacePostsService, ResetPostsService,
};
use crate::settings::adapter::outgoing::SettingsRepositoryStore;
use crate::settings::application::services::{GetSettingsService, SaveSettingsService};
use crate::settings::application::settings_use_cases::SettingsUseCases;
use crate::shared::storage::StateStore;

pub fn settings(store: &StateStore) -> SettingsUseCases {
    let repo = SettingsRepositoryStore::new(store.clone());
    SettingsUseCases {
        get: Arc::new(GetSettingsService::new(repo.clone())),
        save: Arc::new(SaveSettingsService::new(repo)),
    }
}

pub fn blog(store: &StateStore) -> BlogUseCases {
    let repo = PostRepositoryStore::new(store.clone());
    BlogUseCases {
        list: Arc::new(ListPostsService::new(repo.clone())),
        get: Arc::new(GetPostService::new(repo.clone())),
        replace: Arc::new(ReplacePostsService::new(repo.clone())),
        reset: Arc::new(ResetPostsService::new(repo)),
    }
}
