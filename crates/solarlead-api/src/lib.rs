//! # solarlead-api
//!
//! HTTP server for Solarlead.
//!
//! - `GET /`: landing page with active FAQs and the consultation form
//! - `POST /submit-consultation/`: validated lead intake
//! - `GET /api/solar-estimate`: rooftop savings estimate
//! - `GET /healthz`: lifecycle probe
//!
//! Handlers receive the store through [`AppState`]; nothing here knows which
//! backend is behind it.

#![forbid(unsafe_code)]

pub mod error;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, Result};
pub use routes::router;
pub use server::{Server, shutdown_signal};
pub use state::AppState;
