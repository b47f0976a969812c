//! Consultation form submissions.

use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use solarlead_api::routes::consultation::SUCCESS_MESSAGE;

use crate::common::{TestApp, VALID_FORM, body_json};

#[tokio::test]
async fn test_valid_submission_stores_one_lead() {
    let app = TestApp::new().await;
    assert_eq!(app.lead_count().await, 0);

    let response = app.post_form("/submit-consultation/", VALID_FORM).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], SUCCESS_MESSAGE);

    assert_eq!(app.lead_count().await, 1);
    let leads = app.state.store.recent_leads(1).await.unwrap();
    assert_eq!(leads[0].full_name, "Jane Doe");
    assert_eq!(leads[0].message, None);
}

#[tokio::test]
async fn test_values_are_trimmed_before_storing() {
    let app = TestApp::new().await;
    let response = app
        .post_form(
            "/submit-consultation/",
            "full_name=++Jane+Doe++&mobile_number=+9876543210+&district=Howrah&pin_code=711101&message=+Call+after+6+",
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let lead = &app.state.store.recent_leads(1).await.unwrap()[0];
    assert_eq!(lead.full_name, "Jane Doe");
    assert_eq!(lead.mobile_number, "9876543210");
    assert_eq!(lead.message.as_deref(), Some("Call after 6"));
}

#[tokio::test]
async fn test_bengali_digits_are_accepted() {
    let app = TestApp::new().await;
    let response = app
        .post_form(
            "/submit-consultation/",
            "full_name=Jane+Doe\
             &mobile_number=%E0%A7%AF%E0%A7%AE%E0%A7%AD%E0%A7%AC%E0%A7%AB%E0%A7%AA%E0%A7%A9%E0%A7%A8%E0%A7%A7%E0%A7%A6\
             &district=Howrah\
             &pin_code=%E0%A7%AD%E0%A7%A7%E0%A7%A7%E0%A7%A7%E0%A7%A6%E0%A7%A7",
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let lead = &app.state.store.recent_leads(1).await.unwrap()[0];
    assert_eq!(lead.mobile_number, "৯৮৭৬৫৪৩২১০");
    assert_eq!(lead.pin_code, "৭১১১০১");
}

#[tokio::test]
async fn test_empty_full_name_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .post_form(
            "/submit-consultation/",
            "full_name=&mobile_number=9876543210&district=Howrah&pin_code=711101",
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"]["full_name"], "This field is required.");
    assert_eq!(body["errors"].as_object().unwrap().len(), 1);
    assert_eq!(app.lead_count().await, 0);
}

#[tokio::test]
async fn test_bad_mobile_and_pin_are_reported_together() {
    let app = TestApp::new().await;
    let response = app
        .post_form(
            "/submit-consultation/",
            "full_name=Jane&mobile_number=123&district=Howrah&pin_code=ABCDEF",
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let errors = body["errors"].as_object().unwrap();
    let keys: Vec<_> = errors.keys().map(String::as_str).collect();
    assert_eq!(keys, ["mobile_number", "pin_code"]);
    assert_eq!(errors["mobile_number"], "Valid 10-digit mobile number is required");
    assert_eq!(errors["pin_code"], "Valid 6-digit PIN code is required");
    assert_eq!(app.lead_count().await, 0);
}

#[tokio::test]
async fn test_empty_body_reports_every_required_field() {
    let app = TestApp::new().await;
    let response = app.post_form("/submit-consultation/", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let errors = body["errors"].as_object().unwrap();
    for field in ["full_name", "mobile_number", "district", "pin_code"] {
        assert_eq!(errors[field], "This field is required.", "{field}");
    }
}

#[tokio::test]
async fn test_wrong_content_type_is_treated_as_empty_form() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/submit-consultation/")
        .header(header::CONTENT_TYPE, "text/plain")
        .header(header::COOKIE, format!("csrftoken={}", crate::common::TOKEN))
        .header("X-CSRFToken", crate::common::TOKEN)
        .body(Body::from("hello"))
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["errors"]["full_name"], "This field is required.");
}

#[tokio::test]
async fn test_missing_csrf_token_is_forbidden() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/submit-consultation/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(VALID_FORM))
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["errors"]["general"],
        "CSRF verification failed. Request aborted."
    );
    assert_eq!(app.lead_count().await, 0);
}

#[tokio::test]
async fn test_get_on_submit_route_is_method_not_allowed() {
    let app = TestApp::new().await;
    let response = app.get("/submit-consultation/").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
