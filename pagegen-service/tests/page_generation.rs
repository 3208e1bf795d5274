//! Catch-all route: path -> topic -> prompt -> provider -> sanitized HTML.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_string, content_type, form_post, get, mock_state};
use pagegen_service::config::ErrorStatusPolicy;
use pagegen_service::services::composer::USER_REQUEST_SEPARATOR;
use pagegen_service::services::providers::mock::MockTextProvider;
use pagegen_service::startup::build_router;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn generates_sanitized_page_for_nested_path() {
    let mock = Arc::new(
        MockTextProvider::responding("```html\n<!DOCTYPE html>...</html>\n```").recording(),
    );
    let app = build_router(mock_state(mock.clone(), ErrorStatusPolicy::AlwaysOk));

    let response = app
        .oneshot(get("/products/vintage_cameras"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));
    assert_eq!(body_string(response).await, "<!DOCTYPE html>...</html>");

    let prompts = mock.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("a page about 'products vintage cameras'"));
    assert!(prompts[0].contains(USER_REQUEST_SEPARATOR));
    assert!(prompts[0].contains("You are a professional web developer"));
}

#[tokio::test]
async fn root_path_is_the_home_page() {
    let mock = Arc::new(MockTextProvider::responding("<html></html>").recording());
    let app = build_router(mock_state(mock.clone(), ErrorStatusPolicy::AlwaysOk));

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(mock.prompts()[0].contains("a page about 'home'"));
}

#[tokio::test]
async fn percent_encoded_paths_are_decoded_before_translation() {
    let mock = Arc::new(MockTextProvider::responding("<html></html>").recording());
    let app = build_router(mock_state(mock.clone(), ErrorStatusPolicy::AlwaysOk));

    app.oneshot(get("/blog/the%20future_of_ai")).await.unwrap();

    assert!(mock.prompts()[0].contains("a page about 'blog the future of ai'"));
}

#[tokio::test]
async fn any_method_reaches_the_catch_all() {
    let mock = Arc::new(MockTextProvider::responding("<html>post</html>").recording());
    let app = build_router(mock_state(mock.clone(), ErrorStatusPolicy::AlwaysOk));

    let response = app
        .oneshot(form_post("/contact", "name=someone"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "<html>post</html>");
    assert!(mock.prompts()[0].contains("'contact'"));
}

#[tokio::test]
async fn edited_prompt_reaches_next_generation() {
    let mock = Arc::new(MockTextProvider::responding("<html></html>").recording());
    let app = build_router(mock_state(mock.clone(), ErrorStatusPolicy::AlwaysOk));

    app.clone()
        .oneshot(form_post("/change-prompt", "new_prompt=Only+use+purple"))
        .await
        .unwrap();
    app.oneshot(get("/about")).await.unwrap();

    let prompt = &mock.prompts()[0];
    assert!(prompt.contains(&format!("Only use purple{}", USER_REQUEST_SEPARATOR)));
    assert!(!prompt.contains("You are a professional web developer"));
}

#[tokio::test]
async fn upstream_failure_renders_error_page_with_200_by_default() {
    let mock = Arc::new(MockTextProvider::failing_upstream(503, "overloaded"));
    let app = build_router(mock_state(mock, ErrorStatusPolicy::AlwaysOk));

    let response = app.oneshot(get("/anything")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));

    let body = body_string(response).await;
    assert!(body.contains("<h1>Error: API request failed</h1>"));
    assert!(body.contains("Status code: 503"));
}

#[tokio::test]
async fn propagate_policy_returns_upstream_status() {
    let mock = Arc::new(MockTextProvider::failing_upstream(503, "overloaded"));
    let app = build_router(mock_state(mock, ErrorStatusPolicy::Propagate));

    let response = app.oneshot(get("/anything")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(body_string(response).await.contains("Error"));
}

#[tokio::test]
async fn network_failure_maps_to_bad_gateway_when_propagating() {
    let mock = Arc::new(MockTextProvider::failing_network("connection refused"));
    let app = build_router(mock_state(mock, ErrorStatusPolicy::Propagate));

    let response = app.oneshot(get("/anything")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_string(response).await;
    assert!(body.contains("Could not connect to the mock API"));
    assert!(body.contains("connection refused"));
}

#[tokio::test]
async fn failure_detail_is_escaped() {
    let mock = Arc::new(MockTextProvider::failing_network("<script>x</script>"));
    let app = build_router(mock_state(mock, ErrorStatusPolicy::AlwaysOk));

    let body = body_string(app.oneshot(get("/x")).await.unwrap()).await;
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn undecodable_path_is_not_the_home_page() {
    let mock = Arc::new(MockTextProvider::responding("<html></html>").recording());
    let app = build_router(mock_state(mock.clone(), ErrorStatusPolicy::AlwaysOk));

    let response = app.oneshot(get("/products/%FF%FE")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let prompts = mock.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("a page about 'products \u{FFFD}\u{FFFD}'"));
    assert!(!prompts[0].contains("'home'"));
}

#[tokio::test]
async fn health_and_metrics_are_not_generated() {
    let mock = Arc::new(MockTextProvider::default().recording());
    let app = build_router(mock_state(mock.clone(), ErrorStatusPolicy::AlwaysOk));

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "mock");

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(mock.prompts().is_empty());
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = build_router(mock_state(
        Arc::new(MockTextProvider::default()),
        ErrorStatusPolicy::AlwaysOk,
    ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}
