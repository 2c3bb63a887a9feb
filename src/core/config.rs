//! Configuration file management.
//!
//! Handles the optional `.keylift.toml` in the current directory. It only
//! supplies defaults for flags; flags always win. Nothing else is persisted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Defaults read from `.keylift.toml`.
///
/// ```toml
/// [keylift]
/// vault = "team-vault"
/// output = "deploy/env.yml"
/// strict = true
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keylift: Settings,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Default Key Vault name for `--vault`.
    #[serde(default)]
    pub vault: Option<String>,
    /// Default pipeline output path for `--out`.
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Fail on malformed lines by default.
    #[serde(default)]
    pub strict: Option<bool>,
}

impl Config {
    /// Path of the configuration file in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `.keylift.toml`, or defaults when it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` for a file
    /// that exists but cannot be used.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path; absent file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        Ok(config)
    }

    /// Whether strict parsing is on by default.
    pub fn strict(&self) -> bool {
        self.keylift.strict.unwrap_or(false)
    }
}
