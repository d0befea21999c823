//! Run configuration
//!
//! Optional, read-only settings from `~/.config/kwic/config.yaml`. They only
//! cover ambient behavior (where to look for input by default, whether to
//! keep a log file). Ranking, rotation and output format are fixed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::CliArgs;
use crate::error::{KwicError, Result};

/// Settings loaded from the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KwicConfig {
    /// Input file used when no path is given on the command line
    pub default_input: PathBuf,
    /// Also write debug logs to `~/.config/kwic/logs/kwic.log`
    pub log_to_file: bool,
}

impl Default for KwicConfig {
    fn default() -> Self {
        Self {
            default_input: PathBuf::from("input.txt"),
            log_to_file: false,
        }
    }
}

impl KwicConfig {
    /// Parse a YAML document, filling unspecified fields with defaults
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<LoadedConfig> {
        if !path.exists() {
            return Ok(LoadedConfig {
                config: Self::default(),
                origin: ConfigOrigin::Missing(path.to_path_buf()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| KwicError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| KwicError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LoadedConfig {
            config,
            origin: ConfigOrigin::File(path.to_path_buf()),
        })
    }

    /// Load from the standard location, or defaults when there is none
    pub fn load() -> Result<LoadedConfig> {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(LoadedConfig {
                config: Self::default(),
                origin: ConfigOrigin::NoConfigDir,
            }),
        }
    }
}

/// Where a loaded config came from.
///
/// Loading happens before tracing is initialized, so the outcome is carried
/// here and logged afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    Missing(PathBuf),
    NoConfigDir,
}

impl ConfigOrigin {
    pub fn log(&self) {
        match self {
            Self::File(path) => tracing::info!("Loaded config from {}", path.display()),
            Self::Missing(path) => {
                tracing::debug!("Config file not found at {}, using defaults", path.display())
            }
            Self::NoConfigDir => tracing::debug!("No config directory available, using defaults"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: KwicConfig,
    pub origin: ConfigOrigin,
}

/// Everything one run needs, resolved from CLI args and config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
}

impl RunConfig {
    pub fn resolve(args: CliArgs, config: &KwicConfig) -> Self {
        Self {
            input: args
                .input
                .unwrap_or_else(|| config.default_input.clone()),
        }
    }
}
