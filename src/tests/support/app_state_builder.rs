use std::sync::Arc;

use actix_web::web;

use crate::auth::application::domain::entities::User;
use crate::auth::application::use_cases::{
    change_password::IChangePasswordUseCase, login_user::ILoginUserUseCase,
    logout_user::ILogoutUseCase, register_user::IRegisterUserUseCase,
    resolve_session::IResolveSessionUseCase, update_profile::UpdateUserProfileUseCase,
};
use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::incoming::use_cases::{
    ListSubmissionsUseCase, SubmitContactUseCase,
};
use crate::newsletter::application::newsletter_use_cases::NewsletterUseCases;
use crate::newsletter::application::ports::incoming::use_cases::{
    ListSubscribersUseCase, MarkPromptShownUseCase, PromptStatusUseCase, SubscribeUseCase,
};
use crate::settings::application::settings_use_cases::SettingsUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    resolve_session: Arc<dyn IResolveSessionUseCase + Send + Sync>,
    update_user_profile: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    change_password: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    newsletter: NewsletterUseCases,
    contact: ContactUseCases,
    settings: SettingsUseCases,
    blog: BlogUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            logout_user: Arc::new(StubLogoutUserUseCase),
            resolve_session: Arc::new(StubResolveSessionUseCase { user: None }),
            update_user_profile: Arc::new(StubUpdateUserProfileUseCase),
            change_password: Arc::new(StubChangePasswordUseCase),
            newsletter: NewsletterUseCases {
                subscribe: Arc::new(StubSubscribeUseCase),
                list_subscribers: Arc::new(StubListSubscribersUseCase),
                prompt_status: Arc::new(StubPromptStatusUseCase),
                mark_prompt_shown: Arc::new(StubMarkPromptShownUseCase),
            },
            contact: ContactUseCases {
                submit: Arc::new(StubSubmitContactUseCase),
                list_submissions: Arc::new(StubListSubmissionsUseCase),
            },
            settings: SettingsUseCases {
                get: Arc::new(StubGetSettingsUseCase),
                save: Arc::new(StubSaveSettingsUseCase),
            },
            blog: BlogUseCases {
                list: Arc::new(StubListPostsUseCase),
                get: Arc::new(StubGetPostUseCase),
                replace: Arc::new(StubReplacePostsUseCase),
                reset: Arc::new(StubResetPostsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    /// Requests carrying `TEST_TOKEN` resolve to `user`.
    pub fn with_session(mut self, user: User) -> Self {
        self.resolve_session = Arc::new(StubResolveSessionUseCase { user: Some(user) });
        self
    }

    pub fn with_session_store_down(mut self) -> Self {
        self.resolve_session = Arc::new(StubSessionStoreDown);
        self
    }

    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_update_user_profile(
        mut self,
        uc: impl UpdateUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_user_profile = Arc::new(uc);
        self
    }

    pub fn with_change_password(
        mut self,
        uc: impl IChangePasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.change_password = Arc::new(uc);
        self
    }

    pub fn with_subscribe(mut self, uc: impl SubscribeUseCase + Send + Sync + 'static) -> Self {
        self.newsletter.subscribe = Arc::new(uc);
        self
    }

    pub fn with_list_subscribers(
        mut self,
        uc: impl ListSubscribersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.newsletter.list_subscribers = Arc::new(uc);
        self
    }

    pub fn with_prompt_status(
        mut self,
        uc: impl PromptStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.newsletter.prompt_status = Arc::new(uc);
        self
    }

    pub fn with_mark_prompt_shown(
        mut self,
        uc: impl MarkPromptShownUseCase + Send + Sync + 'static,
    ) -> Self {
        self.newsletter.mark_prompt_shown = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_list_submissions(
        mut self,
        uc: impl ListSubmissionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.list_submissions = Arc::new(uc);
        self
    }

    pub fn with_settings(mut self, settings: SettingsUseCases) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_blog(mut self, blog: BlogUseCases) -> Self {
        self.blog = blog;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            logout_user_use_case: self.logout_user,
            resolve_session_use_case: self.resolve_session,
            update_user_profile_use_case: self.update_user_profile,
            change_password_use_case: self.change_password,
            newsletter: self.newsletter,
            contact: self.contact,
            settings: self.settings,
            blog: self.blog,
        })
    }
}
