use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::render::OutputFormat;

pub const DEFAULT_STATUS_PATH: &str = "/var/lib/dpkg/status";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub status_path: PathBuf,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_path: PathBuf::from(DEFAULT_STATUS_PATH),
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings read from a JSON config file. Every key is optional.
#[derive(Default, Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserConfig {
    #[serde(default)]
    pub status_path: Option<PathBuf>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub log_level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl UserConfig {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values given on the command line or through the environment.
#[derive(Default, Debug, Clone)]
pub struct Overrides {
    pub status_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl Config {
    /// Merge settings: overrides, then the config file, then defaults.
    pub fn resolve(overrides: Overrides, file: UserConfig) -> Self {
        let default = Config::default();
        Self {
            status_path: overrides
                .status_path
                .or(file.status_path)
                .unwrap_or(default.status_path),
            format: overrides.format.or(file.format).unwrap_or(default.format),
            log_level: overrides
                .log_level
                .or(file.log_level)
                .unwrap_or(default.log_level),
        }
    }

    /// The status path with symlinks and relative components resolved, if it
    /// exists.
    pub fn canonical_status_path(&self) -> PathBuf {
        dunce::canonicalize(&self.status_path).unwrap_or_else(|_| self.status_path.clone())
    }
}
