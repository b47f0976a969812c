//! # solarlead-store
//!
//! Record store for Solarlead.
//!
//! - [`FaqStore`] / [`LeadStore`]: the storage traits handlers depend on
//! - [`SqliteStore`]: sqlx/SQLite backend with embedded migrations
//! - [`MemoryStore`]: in-process backend for tests
//! - [`seed`]: the fixed FAQ catalog and its destructive reset

#![forbid(unsafe_code)]

pub mod database;
pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use database::SqliteStore;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use seed::{faq_catalog, reset_faqs};
pub use traits::{FaqStore, LeadStore, ReplaceSummary, Store};
