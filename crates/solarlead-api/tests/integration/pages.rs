//! Landing page, assets and health probe.

use http::{StatusCode, header};
use solarlead_core::{FaqCategory, NewFaq, ServiceState};
use solarlead_store::reset_faqs;

use crate::common::{TestApp, body_json, body_text};

#[tokio::test]
async fn test_home_contains_page_structure() {
    let app = TestApp::new().await;
    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    for id in [
        "page-loader",
        "home",
        "calculator",
        "process",
        "stats",
        "faqs",
        "contact",
        "bill-slider",
        "area-slider",
        "faq-tabs",
        "faq-grid",
        "consultation-form",
        "mobile-menu",
        "mobile-menu-backdrop",
        "output-capacity",
        "output-subsidy",
        "output-investment",
        "output-recovery",
    ] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
    for class in ["animate-on-scroll", "fade-up", "stagger-1", "count-up", "hero-slide", "sync-card", "zoom-in"] {
        assert!(html.contains(class), "missing .{class}");
    }
    assert!(html.contains("/static/css/styles.css"));
    assert!(html.contains("/static/js/scripts.js"));
    assert!(html.contains("translate-x-full"));
    assert!(html.contains("onclick=\"toggleMobileMenu(true)\""));
    assert!(html.contains("onclick=\"toggleMobileMenu(false)\""));
}

#[tokio::test]
async fn test_home_issues_csrf_cookie_and_meta_token() {
    let app = TestApp::new().await;
    let response = app.get("/").await;
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let token = cookie
        .strip_prefix("csrftoken=")
        .and_then(|rest| rest.split(';').next())
        .unwrap()
        .to_string();
    let html = body_text(response).await;
    assert!(html.contains(&format!("<meta name=\"csrf-token\" content=\"{token}\">")));
}

#[tokio::test]
async fn test_home_keeps_existing_csrf_cookie() {
    let app = TestApp::new().await;
    let request = http::Request::builder()
        .uri("/")
        .header(header::COOKIE, "csrftoken=abc123")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let html = body_text(response).await;
    assert!(html.contains("content=\"abc123\""));
}

#[tokio::test]
async fn test_home_shows_only_active_faqs() {
    let app = TestApp::new().await;
    let store = &app.state.store;
    store
        .insert_faq(NewFaq::new(FaqCategory::Technical, "Visible question?", "Shown"))
        .await
        .unwrap();
    store
        .insert_faq(
            NewFaq::new(FaqCategory::Technical, "Hidden question?", "Not shown").with_active(false),
        )
        .await
        .unwrap();

    let html = body_text(app.get("/").await).await;
    assert!(html.contains("Visible question?"));
    assert!(!html.contains("Hidden question?"));
    assert_eq!(html.matches("class=\"faq-item").count(), 1);
}

#[tokio::test]
async fn test_home_renders_seeded_catalog() {
    let app = TestApp::new().await;
    reset_faqs(app.state.store.as_ref()).await.unwrap();
    let html = body_text(app.get("/").await).await;
    assert_eq!(html.matches("class=\"faq-item").count(), 13);
    assert!(html.contains("What is PM Surya Ghar Muft Bijli Yojana?"));
    assert!(!html.contains("id=\"faq-empty\""));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let app = TestApp::new().await;

    let css = app.get("/static/css/styles.css").await;
    assert_eq!(css.status(), StatusCode::OK);
    assert_eq!(
        css.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css; charset=utf-8"
    );

    let js = app.get("/static/js/scripts.js").await;
    assert_eq!(js.status(), StatusCode::OK);
    let script = body_text(js).await;
    for function in [
        "initScrollAnimations",
        "calculateSolar",
        "filterFaq",
        "toggleFaq",
        "highlightActiveSection",
        "initHeroCarousel",
        "toggleMobileMenu",
    ] {
        assert!(script.contains(&format!("function {function}")), "missing {function}");
    }
}

#[tokio::test]
async fn test_health_reflects_service_state() {
    let app = TestApp::new().await;
    let response = app.get("/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["service"], "solarlead");

    app.state.service.set_state(ServiceState::Stopping);
    let response = app.get("/healthz").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["status"], "stopping");
}
