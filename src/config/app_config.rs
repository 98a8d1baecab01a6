use crate::session::session_store::default_session_path;

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/ProductionStage";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_THREADS: usize = 4;

pub const API_URL_ENV: &str = "CSGO_EXPLORER_API_URL";
pub const LOG_LEVEL_ENV: &str = "CSGO_EXPLORER_LOG";
pub const SESSION_PATH_ENV: &str = "CSGO_EXPLORER_SESSION";

/// Errors that may occur while loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Runtime settings of the viewer.
///
/// Resolved from defaults, then an optional TOML file, then environment variables, then
/// command-line flags (applied by the binary).
///
/// # Fields
///
/// * `api_base_url` - Base URL of the API gateway stage.
/// * `log_level` - `tracing` filter directive used when no verbosity flag is given.
/// * `session_path` - Where the session context is stored.
/// * `threads` - Worker threads used by batch reshaping.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
    pub session_path: PathBuf,
    pub threads: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            session_path: default_session_path()
                .unwrap_or_else(|| PathBuf::from(".csgo-explorer-session.json")),
            threads: DEFAULT_THREADS,
        }
    }
}

impl AppConfig {
    /// Loads a TOML file, keeping defaults for absent keys.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies the `CSGO_EXPLORER_*` environment variables.
    pub fn merge_env_vars(&mut self) {
        self.merge_vars(|name| std::env::var(name).ok());
    }

    fn merge_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(api_url) = lookup(API_URL_ENV) {
            self.api_base_url = api_url;
        }

        if let Some(log_level) = lookup(LOG_LEVEL_ENV) {
            self.log_level = log_level;
        }

        if let Some(session_path) = lookup(SESSION_PATH_ENV) {
            self.session_path = PathBuf::from(session_path);
        }
    }
}
