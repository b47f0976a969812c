//! Flagless FAQ seeding script.
//!
//! Equivalent to `solarlead seed`; configuration comes from
//! `SOLARLEAD_CONFIG`, the default config file and `SOLARLEAD_*` variables.

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use solarlead_cli::commands::{open_store, seed};
use solarlead_cli::logging;
use solarlead_core::SolarleadConfig;
use solarlead_core::traits::ConfigManager;

#[tokio::main]
async fn main() -> Result<()> {
    let config = SolarleadConfig::load(None).context("loading configuration")?;
    logging::init(&config.logging.level);

    let store = open_store(&config.database).await?;
    let mut stdout = std::io::stdout().lock();
    let result = seed::run(&store, &mut stdout).await;
    store.close().await;
    result
}
