//! # solarlead-cli
//!
//! Command-line tools for Solarlead:
//! - `serve`: run the HTTP server
//! - `seed`: reset the FAQ catalog
//! - `leads`: list recent consultation requests
//! - `faq`: list, hide and show FAQ entries
//! - `config`: inspect and initialise configuration

#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod logging;

pub use cli::{Args, Command};
