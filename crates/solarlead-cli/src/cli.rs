//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use solarlead_core::FaqCategory;

/// Solarlead - rooftop solar landing page and lead intake
#[derive(Parser, Debug)]
#[command(name = "solarlead", version)]
#[command(about = "Rooftop solar landing page and consultation lead intake", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Address to bind, overriding `server.host`
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overriding `server.port`
        #[arg(long)]
        port: Option<u16>,
    },

    /// Replace every FAQ with the built-in catalog
    Seed,

    /// List recent consultation requests
    Leads {
        /// Maximum number of requests to show
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },

    /// FAQ administration
    Faq {
        /// FAQ action
        #[command(subcommand)]
        action: FaqAction,
    },

    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// FAQ subcommands.
#[derive(Subcommand, Debug)]
pub enum FaqAction {
    /// List FAQs, active and hidden
    List {
        /// Only this category (general, subsidy, technical, installation)
        #[arg(long)]
        category: Option<FaqCategory>,
    },
    /// Show an FAQ on the landing page
    Activate {
        /// FAQ id
        id: i64,
    },
    /// Hide an FAQ without deleting it
    Deactivate {
        /// FAQ id
        id: i64,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print one value by dotted key, e.g. `server.port`
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Destination, defaulting to the platform config directory
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for `docker run`
        #[arg(long)]
        docker_env: bool,
    },
}
