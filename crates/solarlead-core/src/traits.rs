//! Traits shared by Solarlead crates.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

use crate::{Error, Result};

/// Environment lookup used when applying overrides.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// A configuration type loaded from TOML with environment overrides.
///
/// Resolution order for the file: explicit path, then `<PREFIX>_CONFIG`,
/// then `<config dir>/<project>/config.toml`. A missing default file
/// yields `Default::default()`; a missing explicit file is an error.
pub trait ConfigManager: Default + Serialize + DeserializeOwned {
    /// Project name, used for the config directory.
    fn project_name() -> &'static str;

    /// Prefix of the environment variables this config reads.
    fn env_prefix() -> &'static str;

    /// Applies environment overrides on top of file values.
    fn apply_env(&mut self, env: EnvLookup<'_>) -> Result<()>;

    /// Environment variables equivalent to this configuration.
    fn to_env_vars(&self) -> Vec<(String, String)>;

    /// Checks cross-field consistency after loading.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Platform default location of the config file.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(Self::project_name()).join("config.toml"))
    }

    /// Resolves the config file path without touching the filesystem.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        Self::resolve_config_path_with(explicit, &|k| std::env::var(k).ok())
    }

    /// [`resolve_config_path`](Self::resolve_config_path) with an injected environment.
    fn resolve_config_path_with(explicit: Option<&str>, env: EnvLookup<'_>) -> Option<PathBuf> {
        explicit
            .map(PathBuf::from)
            .or_else(|| env(&format!("{}_CONFIG", Self::env_prefix())).map(PathBuf::from))
            .or_else(Self::default_config_path)
    }

    /// Loads the configuration using the process environment.
    fn load(explicit: Option<&str>) -> Result<Self> {
        Self::load_with(explicit, &|k| std::env::var(k).ok())
    }

    /// Loads the configuration using an injected environment.
    fn load_with(explicit: Option<&str>, env: EnvLookup<'_>) -> Result<Self> {
        let path = Self::resolve_config_path_with(explicit, env);
        let mut config = match path {
            Some(path) if path.exists() => {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
                toml::from_str(&content).map_err(|e| {
                    Error::config(format!("Failed to parse {}: {e}", path.display()))
                })?
            }
            Some(path) if explicit.is_some() => {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            _ => Self::default(),
        };
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
