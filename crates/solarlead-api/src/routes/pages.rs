//! Landing page and its embedded assets.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use http::{HeaderMap, header};

use crate::Result;
use crate::middleware::csrf;
use crate::state::AppState;

const STYLES: &str = include_str!("../../static/css/styles.css");
const SCRIPTS: &str = include_str!("../../static/js/scripts.js");
const ASSET_CACHE: &str = "public, max-age=3600";

/// `GET /`: the landing page with active FAQs.
///
/// Issues a CSRF cookie when the request does not already carry a valid one.
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let existing = csrf::cookie_token(&headers, &state.csrf.cookie_name).map(str::to_owned);
    let token = existing.clone().unwrap_or_else(csrf::new_token);

    let html = match render_home(&state, &token).await {
        Ok(html) => html,
        Err(e) => return e.into_page_response(),
    };

    let mut response = Html(html).into_response();
    if existing.is_none()
        && let Some(cookie) = csrf::set_cookie_value(&state.csrf.cookie_name, &token)
    {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}

async fn render_home(state: &AppState, token: &str) -> Result<String> {
    let faqs = state.store.active_faq_sections().await?;
    tracing::debug!(faqs = faqs.total(), "rendering landing page");
    state.pages.home(&state.site, &faqs, token)
}

/// `GET /static/css/styles.css`
pub async fn styles() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, ASSET_CACHE),
        ],
        STYLES,
    )
}

/// `GET /static/js/scripts.js`
pub async fn scripts() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, ASSET_CACHE),
        ],
        SCRIPTS,
    )
}
