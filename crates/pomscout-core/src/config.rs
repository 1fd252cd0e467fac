use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pomscout_util::errors::ScoutError;

use crate::DEFAULT_DESCRIPTOR_NAME;

/// Global user configuration loaded from `~/.pomscout/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Descriptor discovery settings from `[search]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_descriptor")]
    pub descriptor: String,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            descriptor: default_descriptor(),
            exclude: Vec::new(),
        }
    }
}

fn default_descriptor() -> String {
    DEFAULT_DESCRIPTOR_NAME.to_string()
}

/// Traversal settings from `[resolver]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default, rename = "on-cycle")]
    pub on_cycle: CyclePolicy,
}

/// What to do when descriptors depend on each other in a loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Abort the run with the offending chain.
    #[default]
    Fail,
    /// Log the back-edge, do not follow it, and keep going.
    Warn,
}

impl GlobalConfig {
    /// Load the global configuration from `~/.pomscout/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if path.is_file() {
            let content = std::fs::read_to_string(path).map_err(|e| ScoutError::Config {
                message: format!("Failed to read {}: {e}", path.display()),
            })?;
            toml::from_str(&content).map_err(|e| {
                ScoutError::Config {
                    message: format!("Failed to parse {}: {e}", path.display()),
                }
                .into()
            })
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the pomscout data directory (`~/.pomscout/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".pomscout")
}
