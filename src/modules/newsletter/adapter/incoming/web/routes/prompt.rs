use actix_web::{get, post, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::OptionalUser,
    newsletter::application::ports::incoming::use_cases::PromptStatus,
    shared::api::ApiResponse,
    AppState,
};

/// Should the newsletter prompt be shown?
///
/// Always false for logged-in callers. Otherwise true when the prompt was
/// never shown or was last shown more than 7 days ago.
#[utoipa::path(
    get,
    path = "/api/newsletter/prompt",
    tag = "newsletter",
    security((), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Prompt status", body = inline(SuccessResponse<PromptStatus>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/newsletter/prompt")]
pub async fn prompt_status_handler(
    caller: OptionalUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.newsletter.prompt_status.execute(caller.0.is_some()).await {
        Ok(status) => ApiResponse::success(status),
        Err(e) => {
            error!(error = %e, "Failed to read prompt state");
            ApiResponse::internal_error()
        }
    }
}

/// Record that the newsletter prompt was just shown
#[utoipa::path(
    post,
    path = "/api/newsletter/prompt",
    tag = "newsletter",
    responses(
        (status = 200, description = "Prompt marked as shown", body = inline(SuccessResponse<PromptStatus>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/newsletter/prompt")]
pub async fn mark_prompt_shown_handler(data: web::Data<AppState>) -> impl Responder {
    match data.newsletter.mark_prompt_shown.execute().await {
        Ok(status) => ApiResponse::success(status),
        Err(e) => {
            error!(error = %e, "Failed to record prompt state");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::newsletter::adapter::outgoing::PromptRepositoryStore;
    use crate::newsletter::application::services::{MarkPromptShownService, PromptStatusService};
    use crate::shared::storage::StateStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{bearer, sample_user};
    use actix_web::{test, App};

    fn builder_with_store(store: &StateStore) -> TestAppStateBuilder {
        let repo = PromptRepositoryStore::new(store.clone());
        TestAppStateBuilder::default()
            .with_prompt_status(PromptStatusService::new(repo.clone()))
            .with_mark_prompt_shown(MarkPromptShownService::new(repo))
    }

    #[actix_web::test]
    async fn test_prompt_hidden_after_being_shown() {
        let store = StateStore::in_memory();
        let app = test::init_service(
            App::new()
                .app_data(builder_with_store(&store).build())
                .service(prompt_status_handler)
                .service(mark_prompt_shown_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/newsletter/prompt").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["shouldShow"], true);

        let req = test::TestRequest::post().uri("/api/newsletter/prompt").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["shouldShow"], false);
        assert!(body["data"]["lastShown"].is_string());

        let req = test::TestRequest::get().uri("/api/newsletter/prompt").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["shouldShow"], false);
    }

    #[actix_web::test]
    async fn test_prompt_hidden_for_logged_in_users() {
        let store = StateStore::in_memory();
        let app = test::init_service(
            App::new()
                .app_data(
                    builder_with_store(&store)
                        .with_session(sample_user(false))
                        .build(),
                )
                .service(prompt_status_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/newsletter/prompt")
            .insert_header(bearer())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["shouldShow"], false);
    }

    #[actix_web::test]
    async fn test_session_lookup_failure_does_not_show_the_prompt() {
        let store = StateStore::in_memory();
        let app = test::init_service(
            App::new()
                .app_data(builder_with_store(&store).with_session_store_down().build())
                .service(prompt_status_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/newsletter/prompt")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
