//! Solarlead core: shared domain types, validation and configuration.
//!
//! This crate has no internal Solarlead dependencies and performs no I/O
//! beyond reading its own configuration file.
//!
//! # Modules
//!
//! - [`types`]: FAQ and lead records, identifiers
//! - [`validation`]: consultation form validation
//! - [`estimate`]: rooftop solar savings estimator
//! - [`config`]: layered TOML/environment configuration
//! - [`service`]: service lifecycle handle used by the health endpoint
//! - [`error`]: error types and `Result` alias

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod estimate;
pub mod service;
pub mod traits;
pub mod types;
pub mod validation;

mod proptests;

// Re-export key types at crate root for convenience
pub use config::SolarleadConfig;
pub use error::{Error, Result};
pub use estimate::{EstimateInput, SavingsEstimate};
pub use service::{ServiceHandle, ServiceState};
pub use traits::ConfigManager;
pub use types::{
    FaqCategory, FaqEntry, FaqId, FaqItem, FaqSections, LeadId, LeadRequest, NewFaq, NewLead,
};
pub use validation::{ConsultationForm, FieldError, FieldErrors};
