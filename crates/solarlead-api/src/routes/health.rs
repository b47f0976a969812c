//! Liveness/readiness probe.

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use http::StatusCode;

use crate::state::AppState;

/// `GET /healthz`: 200 while ready, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.service.report(env!("CARGO_PKG_VERSION"));
    let status = if report.available {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}
