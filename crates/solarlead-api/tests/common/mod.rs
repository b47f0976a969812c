//! Common test utilities for the HTTP integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, Response, header};
use solarlead_api::{AppState, router};
use solarlead_core::{
    FaqCategory, FaqEntry, FaqId, FaqItem, LeadRequest, NewFaq, NewLead, ServiceState,
    SolarleadConfig,
};
use solarlead_store::{FaqStore, LeadStore, ReplaceSummary, SqliteStore, Store, StoreError};
use tower::ServiceExt;

/// Token used by [`TestApp::post_form`].
pub const TOKEN: &str = "0123456789abcdef0123456789abcdef";

/// Router plus a handle on its store.
pub struct TestApp {
    /// The application under test.
    pub router: Router,
    /// State shared with the router.
    pub state: AppState,
}

impl TestApp {
    /// App backed by a fresh in-memory SQLite database.
    pub async fn new() -> Self {
        let store = SqliteStore::in_memory().await.expect("in-memory store");
        Self::with_store(Arc::new(store))
    }

    /// App backed by `store`.
    pub fn with_store(store: Arc<dyn Store>) -> Self {
        let state = AppState::new(store, &SolarleadConfig::default()).expect("state");
        state.service.set_state(ServiceState::Ready);
        Self {
            router: router(state.clone()),
            state,
        }
    }

    /// Sends `request` through a clone of the router.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// `GET path`.
    pub async fn get(&self, path: &str) -> Response<Body> {
        self.send(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
    }

    /// Form-encoded POST carrying a matching CSRF cookie and header.
    pub async fn post_form(&self, path: &str, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::COOKIE, format!("csrftoken={TOKEN}"))
            .header("X-CSRFToken", TOKEN)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Number of stored leads.
    pub async fn lead_count(&self) -> u64 {
        self.state.store.count_leads().await.unwrap()
    }
}

/// Collects a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collects a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// A valid consultation body.
pub const VALID_FORM: &str =
    "full_name=Jane+Doe&mobile_number=9876543210&district=Howrah&pin_code=711101";

/// Store double whose every operation fails with the error built by `make`.
pub struct FailingStore {
    make: fn() -> sqlx::Error,
}

impl FailingStore {
    /// Fails with a non-connectivity driver error.
    pub fn broken() -> Arc<Self> {
        Arc::new(Self {
            make: || sqlx::Error::Protocol("disk image is malformed".to_string()),
        })
    }

    /// Fails as if the pool had been closed.
    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            make: || sqlx::Error::PoolClosed,
        })
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Database((self.make)()))
    }
}

#[async_trait]
impl FaqStore for FailingStore {
    async fn active_faqs(&self, _category: FaqCategory) -> Result<Vec<FaqEntry>, StoreError> {
        self.fail()
    }

    async fn list_faqs(&self, _category: Option<FaqCategory>) -> Result<Vec<FaqItem>, StoreError> {
        self.fail()
    }

    async fn insert_faq(&self, _faq: NewFaq) -> Result<FaqItem, StoreError> {
        self.fail()
    }

    async fn set_faq_active(&self, _id: FaqId, _active: bool) -> Result<FaqItem, StoreError> {
        self.fail()
    }

    async fn replace_faqs(&self, _faqs: &[NewFaq]) -> Result<ReplaceSummary, StoreError> {
        self.fail()
    }
}

#[async_trait]
impl LeadStore for FailingStore {
    async fn insert_lead(&self, _lead: NewLead) -> Result<LeadRequest, StoreError> {
        self.fail()
    }

    async fn count_leads(&self) -> Result<u64, StoreError> {
        self.fail()
    }

    async fn recent_leads(&self, _limit: u32) -> Result<Vec<LeadRequest>, StoreError> {
        self.fail()
    }
}
