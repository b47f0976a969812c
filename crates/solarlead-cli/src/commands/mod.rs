//! Command implementations.
//!
//! Each command writes its user-facing output to the supplied writer and
//! its diagnostics through `tracing`.

pub mod faq;
pub mod leads;
pub mod seed;
pub mod serve;

use std::io::Write;

use anyhow::{Context, Result};
use solarlead_core::SolarleadConfig;
use solarlead_core::config::DatabaseConfig;
use solarlead_core::traits::ConfigManager;
use solarlead_store::SqliteStore;

use crate::cli::{Args, Command};
use crate::{config_handlers, logging};

/// Runs the parsed command line.
pub async fn run(args: Args, out: &mut dyn Write) -> Result<()> {
    let config_path = args.config.as_deref();

    let command = match args.command {
        Command::Config { action } => {
            config_handlers::handle_config_command(config_path, action, out)?;
            return Ok(());
        }
        command => command,
    };

    let config = SolarleadConfig::load(config_path).context("loading configuration")?;
    logging::init(&config.logging.level);

    match command {
        Command::Serve { host, port } => serve::run(config, host, port).await,
        Command::Seed => {
            let store = open_store(&config.database).await?;
            let result = seed::run(&store, out).await;
            store.close().await;
            result
        }
        Command::Leads { limit } => {
            let store = open_store(&config.database).await?;
            let result = leads::run(&store, limit, out).await;
            store.close().await;
            result
        }
        Command::Faq { action } => {
            let store = open_store(&config.database).await?;
            let result = faq::run(&store, action, out).await;
            store.close().await;
            result
        }
        Command::Config { .. } => Ok(()),
    }
}

/// Connects to the configured database and applies migrations.
pub async fn open_store(config: &DatabaseConfig) -> Result<SqliteStore> {
    SqliteStore::connect(config)
        .await
        .with_context(|| format!("opening database {}", config.url))
}
