//! Solarlead CLI
//!
//! Runs the server and administers the FAQ catalog and lead store.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use solarlead_cli::{Args, commands};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut stdout = std::io::stdout().lock();
    commands::run(args, &mut stdout).await
}
