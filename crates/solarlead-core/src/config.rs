//! Solarlead configuration.
//!
//! Loaded from TOML (see [`ConfigManager`]) with `SOLARLEAD_*` environment
//! overrides. Every key has a default, so an empty file is valid.

use serde::{Deserialize, Serialize};

use crate::traits::{ConfigManager, EnvLookup};
use crate::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarleadConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Record store connection.
    pub database: DatabaseConfig,
    /// Cross-site request forgery protection.
    pub csrf: CsrfConfig,
    /// Business details shown on the landing page.
    pub site: SiteConfig,
    /// Log filtering.
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string suitable for a TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Record store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection URL.
    pub url: String,
    /// Pool size.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://solarlead.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

/// Double-submit CSRF token settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsrfConfig {
    /// When false, unsafe requests are not checked.
    pub enabled: bool,
    /// Cookie carrying the token.
    pub cookie_name: String,
    /// Request header that must echo the cookie.
    pub header_name: String,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cookie_name: "csrftoken".to_string(),
            header_name: "x-csrftoken".to_string(),
        }
    }
}

/// Business details rendered on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Business name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Office address.
    pub address: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Ayush Solar".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "info@ayushsolar.in".to_string(),
            address: "Kolkata, West Bengal".to_string(),
        }
    }
}

/// Log filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

const ENV_HOST: &str = "SOLARLEAD_HOST";
const ENV_PORT: &str = "SOLARLEAD_PORT";
const ENV_DATABASE_URL: &str = "SOLARLEAD_DATABASE_URL";
const ENV_CSRF_ENABLED: &str = "SOLARLEAD_CSRF_ENABLED";
const ENV_LOG_LEVEL: &str = "SOLARLEAD_LOG_LEVEL";

impl ConfigManager for SolarleadConfig {
    fn project_name() -> &'static str {
        "solarlead"
    }

    fn env_prefix() -> &'static str {
        "SOLARLEAD"
    }

    fn apply_env(&mut self, env: EnvLookup<'_>) -> Result<()> {
        if let Some(host) = env(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = env(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("{ENV_PORT} is not a valid port: {port}")))?;
        }
        if let Some(url) = env(ENV_DATABASE_URL) {
            self.database.url = url;
        }
        if let Some(enabled) = env(ENV_CSRF_ENABLED) {
            self.csrf.enabled = match enabled.trim() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(Error::config(format!(
                        "{ENV_CSRF_ENABLED} must be true or false, got {other}"
                    )));
                }
            };
        }
        if let Some(level) = env(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        Ok(())
    }

    fn to_env_vars(&self) -> Vec<(String, String)> {
        vec![
            (ENV_HOST.to_string(), self.server.host.clone()),
            (ENV_PORT.to_string(), self.server.port.to_string()),
            (ENV_DATABASE_URL.to_string(), self.database.url.clone()),
            (ENV_CSRF_ENABLED.to_string(), self.csrf.enabled.to_string()),
            (ENV_LOG_LEVEL.to_string(), self.logging.level.clone()),
        ]
    }

    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::config("server.port must be non-zero"));
        }
        if self.database.url.trim().is_empty() {
            return Err(Error::config("database.url must be set"));
        }
        if self.database.max_connections == 0 {
            return Err(Error::config("database.max_connections must be at least 1"));
        }
        if self.csrf.cookie_name.is_empty() || self.csrf.header_name.is_empty() {
            return Err(Error::config("csrf.cookie_name and csrf.header_name must be set"));
        }
        Ok(())
    }
}
