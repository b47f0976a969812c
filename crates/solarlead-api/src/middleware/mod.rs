//! Tower and axum middleware.

pub mod csrf;
pub mod request_tracing;

pub use csrf::{CsrfLayer, CsrfService};
pub use request_tracing::request_tracing;
