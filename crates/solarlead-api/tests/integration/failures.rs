//! Store failures surface as generic 500 / 503 responses.

use http::StatusCode;

use crate::common::{FailingStore, TestApp, VALID_FORM, body_json, body_text};

#[tokio::test]
async fn test_submission_with_broken_store_is_generic_500() {
    let app = TestApp::with_store(FailingStore::broken());
    let response = app.post_form("/submit-consultation/", VALID_FORM).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"]["general"], "An error occurred. Please try again.");
}

#[tokio::test]
async fn test_submission_with_unavailable_store_is_503() {
    let app = TestApp::with_store(FailingStore::unavailable());
    let response = app.post_form("/submit-consultation/", VALID_FORM).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(
        body["errors"]["general"],
        "Service temporarily unavailable. Please try again shortly."
    );
}

#[tokio::test]
async fn test_invalid_submission_never_reaches_store() {
    let app = TestApp::with_store(FailingStore::broken());
    let response = app
        .post_form("/submit-consultation/", "full_name=Jane&mobile_number=1")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_home_with_broken_store_renders_error_page() {
    let app = TestApp::with_store(FailingStore::broken());
    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(response).await;
    assert!(html.contains("An error occurred. Please try again."));
    assert!(!html.contains("malformed"));
}
