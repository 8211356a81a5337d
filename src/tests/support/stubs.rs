use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::{AuthenticatedSession, User};
use crate::auth::application::use_cases::{
    change_password::{ChangePasswordError, ChangePasswordInput, IChangePasswordUseCase},
    login_user::{ILoginUserUseCase, LoginError, LoginRequest},
    logout_user::{ILogoutUseCase, LogoutError},
    register_user::{IRegisterUserUseCase, RegisterUserError, RegisterUserInput},
    resolve_session::{IResolveSessionUseCase, ResolveSessionError},
    update_profile::{UpdateUserError, UpdateUserInput, UpdateUserProfileUseCase},
};
use crate::blog::application::domain::entities::{BlogPost, PostDetail, PostPage};
use crate::blog::application::ports::incoming::use_cases::{
    GetPostError, GetPostUseCase, ListPostsError, ListPostsUseCase, PageQuery, ReplacePostsError,
    ReplacePostsUseCase, ResetPostsError, ResetPostsUseCase,
};
use crate::contact::application::domain::entities::ContactSubmission;
use crate::contact::application::ports::incoming::use_cases::{
    ListSubmissionsError, ListSubmissionsUseCase, SubmitContactCommand, SubmitContactError,
    SubmitContactUseCase,
};
use crate::newsletter::application::domain::entities::Subscriber;
use crate::newsletter::application::ports::incoming::use_cases::{
    ListSubscribersError, ListSubscribersUseCase, MarkPromptShownUseCase, PromptError,
    PromptStatus, PromptStatusUseCase, SubscribeCommand, SubscribeError, SubscribeUseCase,
};
use crate::settings::application::domain::entities::SiteSettings;
use crate::settings::application::ports::incoming::use_cases::{
    GetSettingsError, GetSettingsUseCase, SaveSettingsError, SaveSettingsUseCase,
};
use crate::tests::support::fixtures::TEST_TOKEN;

const NOT_USED: &str = "not used in this test";

// ---------------- auth ----------------

/// Accepts [`TEST_TOKEN`] when a session user is configured.
pub struct StubResolveSessionUseCase {
    pub user: Option<User>,
}

#[async_trait]
impl IResolveSessionUseCase for StubResolveSessionUseCase {
    async fn execute(&self, auth_token: &str) -> Result<AuthenticatedSession, ResolveSessionError> {
        match &self.user {
            Some(user) if auth_token == TEST_TOKEN => Ok(AuthenticatedSession {
                user: user.clone(),
                auth_token: auth_token.to_string(),
            }),
            _ => Err(ResolveSessionError::InvalidToken),
        }
    }
}

/// Every lookup fails as if the session store were unreachable.
pub struct StubSessionStoreDown;

#[async_trait]
impl IResolveSessionUseCase for StubSessionStoreDown {
    async fn execute(&self, _auth_token: &str) -> Result<AuthenticatedSession, ResolveSessionError> {
        Err(ResolveSessionError::RepositoryError("connection refused".to_string()))
    }
}

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _input: RegisterUserInput,
    ) -> Result<AuthenticatedSession, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<AuthenticatedSession, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _auth_token: &str) -> Result<(), LogoutError> {
        Ok(())
    }
}

pub struct StubUpdateUserProfileUseCase;

#[async_trait]
impl UpdateUserProfileUseCase for StubUpdateUserProfileUseCase {
    async fn execute(&self, _data: UpdateUserInput) -> Result<User, UpdateUserError> {
        Err(UpdateUserError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubChangePasswordUseCase;

#[async_trait]
impl IChangePasswordUseCase for StubChangePasswordUseCase {
    async fn execute(&self, _input: ChangePasswordInput) -> Result<User, ChangePasswordError> {
        Err(ChangePasswordError::RepositoryError(NOT_USED.to_string()))
    }
}

// ---------------- newsletter ----------------

pub struct StubSubscribeUseCase;

#[async_trait]
impl SubscribeUseCase for StubSubscribeUseCase {
    async fn execute(&self, command: SubscribeCommand) -> Result<Subscriber, SubscribeError> {
        Ok(Subscriber::new(command.email()))
    }
}

pub struct StubListSubscribersUseCase;

#[async_trait]
impl ListSubscribersUseCase for StubListSubscribersUseCase {
    async fn execute(&self) -> Result<Vec<Subscriber>, ListSubscribersError> {
        Ok(vec![])
    }
}

pub struct StubPromptStatusUseCase;

#[async_trait]
impl PromptStatusUseCase for StubPromptStatusUseCase {
    async fn execute(&self, is_authenticated: bool) -> Result<PromptStatus, PromptError> {
        Ok(PromptStatus {
            should_show: !is_authenticated,
            last_shown: None,
        })
    }
}

pub struct StubMarkPromptShownUseCase;

#[async_trait]
impl MarkPromptShownUseCase for StubMarkPromptShownUseCase {
    async fn execute(&self) -> Result<PromptStatus, PromptError> {
        Ok(PromptStatus {
            should_show: false,
            last_shown: Some(Utc::now()),
        })
    }
}

// ---------------- contact ----------------

pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactSubmission, SubmitContactError> {
        Ok(ContactSubmission {
            name: command.name().to_string(),
            email: command.email().to_string(),
            message: command.message().to_string(),
            submitted_at: Utc::now(),
        })
    }
}

pub struct StubListSubmissionsUseCase;

#[async_trait]
impl ListSubmissionsUseCase for StubListSubmissionsUseCase {
    async fn execute(&self) -> Result<Vec<ContactSubmission>, ListSubmissionsError> {
        Ok(vec![])
    }
}

// ---------------- settings ----------------

pub struct StubGetSettingsUseCase;

#[async_trait]
impl GetSettingsUseCase for StubGetSettingsUseCase {
    async fn execute(&self) -> Result<SiteSettings, GetSettingsError> {
        Ok(SiteSettings::default())
    }
}

pub struct StubSaveSettingsUseCase;

#[async_trait]
impl SaveSettingsUseCase for StubSaveSettingsUseCase {
    async fn execute(&self, settings: SiteSettings) -> Result<SiteSettings, SaveSettingsError> {
        Ok(settings)
    }
}

// ---------------- blog ----------------

pub struct StubListPostsUseCase;

#[async_trait]
impl ListPostsUseCase for StubListPostsUseCase {
    async fn execute(&self, _query: PageQuery) -> Result<PostPage, ListPostsError> {
        Ok(PostPage {
            posts: vec![],
            total: 0,
            has_more: false,
        })
    }
}

pub struct StubGetPostUseCase;

#[async_trait]
impl GetPostUseCase for StubGetPostUseCase {
    async fn execute(&self, _slug: &str) -> Result<PostDetail, GetPostError> {
        Err(GetPostError::NotFound)
    }
}

pub struct StubReplacePostsUseCase;

#[async_trait]
impl ReplacePostsUseCase for StubReplacePostsUseCase {
    async fn execute(&self, posts: Vec<BlogPost>) -> Result<Vec<BlogPost>, ReplacePostsError> {
        Ok(posts)
    }
}

pub struct StubResetPostsUseCase;

#[async_trait]
impl ResetPostsUseCase for StubResetPostsUseCase {
    async fn execute(&self) -> Result<Vec<BlogPost>, ResetPostsError> {
        Ok(vec![])
    }
}
