//! Error types for solarlead-api
//!
//! Every failure a handler can produce maps onto one HTTP status and a
//! JSON body of the form `{"success": false, "errors": {...}}`. Server-side
//! failures are logged here, and only a generic message leaves the process.

use axum::Json;
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use solarlead_core::FieldErrors;
use solarlead_store::StoreError;
use thiserror::Error;

/// Result type alias for solarlead-api operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Message returned for any unexpected server failure.
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// Message returned while the store cannot be reached.
pub const UNAVAILABLE: &str = "Service temporarily unavailable. Please try again shortly.";

/// Message returned when the CSRF check fails.
pub const CSRF_FAILURE: &str = "CSRF verification failed. Request aborted.";

/// Errors that can occur in solarlead-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    /// Submitted fields failed validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Missing or mismatched CSRF token
    #[error("CSRF verification failed")]
    Csrf,

    /// Error from solarlead-store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Template could not be loaded or rendered
    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    /// Socket or other I/O failure while serving
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl ApiError {
    /// HTTP status for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Csrf => StatusCode::FORBIDDEN,
            ApiError::Store(e) if e.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            ApiError::Validation(errors) => {
                tracing::debug!(fields = errors.len(), "request rejected by validation");
            }
            ApiError::Csrf => tracing::warn!("CSRF verification failed"),
            ApiError::Store(e) if e.is_unavailable() => {
                tracing::warn!(error = %e, "store unavailable");
            }
            other => tracing::error!(error = %other, "request failed"),
        }
    }

    /// Renders the failure as a minimal HTML page, for page routes.
    pub fn into_page_response(self) -> Response {
        self.log();
        let status = self.status();
        let message = match status {
            StatusCode::SERVICE_UNAVAILABLE => UNAVAILABLE,
            _ => GENERIC_FAILURE,
        };
        let body = format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
             <title>{code}</title></head><body><h1>{code}</h1><p>{message}</p></body></html>",
            code = status.as_u16(),
        );
        (status, Html(body)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let errors = match self {
            ApiError::Validation(errors) => errors,
            ApiError::Csrf => FieldErrors::single(GENERAL, CSRF_FAILURE),
            _ if status == StatusCode::SERVICE_UNAVAILABLE => {
                FieldErrors::single(GENERAL, UNAVAILABLE)
            }
            _ => FieldErrors::single(GENERAL, GENERIC_FAILURE),
        };
        let body = FailureBody {
            success: false,
            errors,
        };
        (status, Json(body)).into_response()
    }
}

/// Key for errors not tied to a form field.
const GENERAL: &str = "general";

/// `{"success": false, "errors": {...}}`, errors in field order.
#[derive(Serialize)]
struct FailureBody {
    success: bool,
    errors: FieldErrors,
}
