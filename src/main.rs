pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::blog;
pub use modules::contact;
pub use modules::newsletter;
pub use modules::settings;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::{
    security::Argon2Hasher, session_repository_store::SessionRepositoryStore,
    token::Base64TokenProvider, user_repository_store::UserRepositoryStore,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, SessionRepository, TokenProvider};
use crate::auth::application::services::SessionIssuer;
use crate::auth::application::use_cases::{
    change_password::{ChangePasswordUseCase, IChangePasswordUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    resolve_session::{IResolveSessionUseCase, ResolveSessionUseCase},
    update_profile::{UpdateUserProfileService, UpdateUserProfileUseCase},
};
use crate::blog::adapter::outgoing::PostRepositoryStore;
use crate::blog::application::{
    blog_use_cases::BlogUseCases,
    services::{GetPostService, ListPostsService, ReplacePostsService, ResetPostsService},
};
use crate::config::{AppConfig, StoreBackend};
use crate::contact::adapter::outgoing::SubmissionRepositoryStore;
use crate::contact::application::{
    contact_use_cases::ContactUseCases,
    services::{ListSubmissionsService, SubmitContactService},
};
use crate::newsletter::adapter::outgoing::{PromptRepositoryStore, SubscriberRepositoryStore};
use crate::newsletter::application::{
    newsletter_use_cases::NewsletterUseCases,
    services::{ListSubscribersService, MarkPromptShownService, PromptStatusService, SubscribeService},
};
use crate::settings::adapter::outgoing::SettingsRepositoryStore;
use crate::settings::application::{
    services::{GetSettingsService, SaveSettingsService},
    settings_use_cases::SettingsUseCases,
};
use crate::shared::api::custom_json_config;
use crate::shared::storage::{JsonFileStore, KeyValueStore, RedisStore, StateStore};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub resolve_session_use_case: Arc<dyn IResolveSessionUseCase + Send + Sync>,
    pub update_user_profile_use_case: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    pub change_password_use_case: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    pub newsletter: NewsletterUseCases,
    pub contact: ContactUseCases,
    pub settings: SettingsUseCases,
    pub blog: BlogUseCases,
}

/// Wires every use case to repositories over `store`.
pub fn build_state(
    store: &StateStore,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    session_max_age: chrono::Duration,
) -> AppState {
    // Auth
    let user_repo = UserRepositoryStore::new(store.clone());
    let sessions: Arc<dyn SessionRepository + Send + Sync> =
        Arc::new(SessionRepositoryStore::new(store.clone()));
    let tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(Base64TokenProvider::new());
    let session_issuer =
        SessionIssuer::new(Arc::clone(&sessions), Arc::clone(&tokens), session_max_age);

    let register_user_use_case = RegisterUserUseCase::new(
        user_repo.clone(),
        Arc::clone(&password_hasher),
        session_issuer.clone(),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_repo.clone(),
        Arc::clone(&password_hasher),
        session_issuer,
    );
    let logout_user_use_case = LogoutUseCase::new(Arc::clone(&sessions));
    let resolve_session_use_case =
        ResolveSessionUseCase::new(user_repo.clone(), sessions, tokens, session_max_age);
    let update_user_profile_use_case = UpdateUserProfileService::new(user_repo.clone());
    let change_password_use_case = ChangePasswordUseCase::new(user_repo, password_hasher);

    // Newsletter
    let subscriber_repo = SubscriberRepositoryStore::new(store.clone());
    let prompt_repo = PromptRepositoryStore::new(store.clone());
    let newsletter = NewsletterUseCases {
        subscribe: Arc::new(SubscribeService::new(subscriber_repo.clone())),
        list_subscribers: Arc::new(ListSubscribersService::new(subscriber_repo)),
        prompt_status: Arc::new(PromptStatusService::new(prompt_repo.clone())),
        mark_prompt_shown: Arc::new(MarkPromptShownService::new(prompt_repo)),
    };

    // Contact
    let submission_repo = SubmissionRepositoryStore::new(store.clone());
    let contact = ContactUseCases {
        submit: Arc::new(SubmitContactService::new(submission_repo.clone())),
        list_submissions: Arc::new(ListSubmissionsService::new(submission_repo)),
    };

    // Settings
    let settings_repo = SettingsRepositoryStore::new(store.clone());
    let settings = SettingsUseCases {
        get: Arc::new(GetSettingsService::new(settings_repo.clone())),
        save: Arc::new(SaveSettingsService::new(settings_repo)),
    };

    // Blog
    let post_repo = PostRepositoryStore::new(store.clone());
    let blog = BlogUseCases {
        list: Arc::new(ListPostsService::new(post_repo.clone())),
        get: Arc::new(GetPostService::new(post_repo.clone())),
        replace: Arc::new(ReplacePostsService::new(post_repo.clone())),
        reset: Arc::new(ResetPostsService::new(post_repo)),
    };

    AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        resolve_session_use_case: Arc::new(resolve_session_use_case),
        update_user_profile_use_case: Arc::new(update_user_profile_use_case),
        change_password_use_case: Arc::new(change_password_use_case),
        newsletter,
        contact,
        settings,
        blog,
    }
}

#[cfg(not(tarpaulin_include))]
async fn open_store(backend: &StoreBackend) -> anyhow::Result<StateStore> {
    let kv: Arc<dyn KeyValueStore> = match backend {
        StoreBackend::Memory => {
            info!("Using in-memory state store; data is lost on restart");
            return Ok(StateStore::in_memory());
        }
        StoreBackend::File(path) => Arc::new(
            JsonFileStore::open(path.clone())
                .await
                .with_context(|| format!("Failed to open state file {}", path.display()))?,
        ),
        StoreBackend::Redis { url, key_prefix } => {
            let pool = Config::from_url(url)
                .create_pool(Some(Runtime::Tokio1))
                .context("Failed to create Redis pool")?;
            info!(prefix = %key_prefix, "Using Redis state store");
            Arc::new(RedisStore::new(Arc::new(pool), key_prefix.clone()))
        }
    };

    Ok(StateStore::new(kv))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let store = open_store(&config.store).await?;
    store
        .ping()
        .await
        .context("State store is not reachable")?;

    let password_hasher = Argon2Hasher::with_params(
        config.argon2.memory_kib,
        config.argon2.iterations,
        config.argon2.parallelism,
    )
    .context("Invalid Argon2 parameters")?;

    let state = build_state(&store, Arc::new(password_hasher), config.session_max_age);
    let server_url = config.bind_address();
    info!(environment = %config.environment, address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_session_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_password_handler);
    // Newsletter
    cfg.service(crate::newsletter::adapter::incoming::web::routes::subscribe_handler);
    cfg.service(crate::newsletter::adapter::incoming::web::routes::list_subscribers_handler);
    cfg.service(crate::newsletter::adapter::incoming::web::routes::prompt_status_handler);
    cfg.service(crate::newsletter::adapter::incoming::web::routes::mark_prompt_shown_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::list_submissions_handler);
    // Settings
    cfg.service(crate::settings::adapter::incoming::web::routes::get_settings_handler);
    cfg.service(crate::settings::adapter::incoming::web::routes::save_settings_handler);
    // Blog
    cfg.service(crate::blog::adapter::incoming::web::routes::list_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::replace_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::reset_posts_handler);
}

/// Non-zero when start-up failed, so supervisors see the failure.
fn exit_status(result: anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error starting app: {e:#}");
            1
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn main() -> std::process::ExitCode {
    std::process::ExitCode::from(exit_status(start()))
}
