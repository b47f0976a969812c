//! HTTP routes.
//!
//! | Method | Path                      | Handler                                 |
//! |--------|---------------------------|-----------------------------------------|
//! | GET    | `/`                       | [`pages::home`]                         |
//! | POST   | `/submit-consultation/`   | [`consultation::submit_consultation`]   |
//! | GET    | `/api/solar-estimate`     | [`estimate::solar_estimate`]            |
//! | GET    | `/healthz`                | [`health::health`]                      |
//! | GET    | `/static/css/styles.css`  | [`pages::styles`]                       |
//! | GET    | `/static/js/scripts.js`   | [`pages::scripts`]                      |

pub mod consultation;
pub mod estimate;
pub mod health;
pub mod pages;

use axum::Router;
use axum::routing::{get, post};
use crate::middleware::{CsrfLayer, request_tracing};
use crate::state::AppState;

/// Builds the application router.
///
/// Unsafe methods on every route pass through the CSRF check; unrouted
/// methods on a known path get 405.
pub fn router(state: AppState) -> Router {
    let csrf = CsrfLayer::new(state.csrf.as_ref().clone());
    Router::new()
        .route("/", get(pages::home))
        .route(
            "/submit-consultation/",
            post(consultation::submit_consultation),
        )
        .route("/api/solar-estimate", get(estimate::solar_estimate))
        .route("/healthz", get(health::health))
        .route("/static/css/styles.css", get(pages::styles))
        .route("/static/js/scripts.js", get(pages::scripts))
        .layer(csrf)
        .layer(axum::middleware::from_fn(request_tracing))
        .with_state(state)
}
