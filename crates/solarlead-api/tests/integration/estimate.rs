//! Savings estimator endpoint.

use http::StatusCode;

use crate::common::{TestApp, body_json};

#[tokio::test]
async fn test_estimate_for_typical_home() {
    let app = TestApp::new().await;
    let response = app
        .get("/api/solar-estimate?monthly_bill=3000&roof_area=300")
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["recommended_kw"], 3);
    assert_eq!(body["subsidy"], 78_000);
    assert_eq!(body["investment"], 117_000);
    assert_eq!(body["payback_years"], 3.2);
}

#[tokio::test]
async fn test_estimate_is_capped_by_roof_area() {
    let app = TestApp::new().await;
    let body = body_json(
        app.get("/api/solar-estimate?monthly_bill=10000&roof_area=150")
            .await,
    )
    .await;
    assert_eq!(body["recommended_kw"], 1);
    assert_eq!(body["subsidy"], 30_000);
}

#[tokio::test]
async fn test_estimate_rejects_bad_input() {
    let app = TestApp::new().await;
    let response = app
        .get("/api/solar-estimate?monthly_bill=lots&roof_area=99999")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"]["monthly_bill"], "Enter a number.");
    assert!(body["errors"]["roof_area"].is_string());
}

#[tokio::test]
async fn test_estimate_requires_both_inputs() {
    let app = TestApp::new().await;
    let response = app.get("/api/solar-estimate").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["errors"]["monthly_bill"], "This field is required.");
    assert_eq!(body["errors"]["roof_area"], "This field is required.");
}
