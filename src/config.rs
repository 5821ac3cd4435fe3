//! Run configuration loaded from `namechain.toml`.

use crate::search::SearchMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "namechain.toml";

/// Settings for a search run. Every field has a default, so an empty or
/// partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON array of names to search.
    pub input: PathBuf,
    pub mode: SearchMode,
    pub min_length: usize,
    pub max_length: usize,
    /// Result cap per length.
    pub max_per_length: usize,
    /// Only start from names with both incoming and outgoing edges.
    pub connected_only: bool,
    /// Strict cleaning: keep only two-part names.
    pub strict: bool,
    /// Search lengths concurrently.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("outputs").join("celebrity_list_cleaned.json"),
            mode: SearchMode::Loop,
            min_length: 3,
            max_length: 5,
            max_per_length: 2,
            connected_only: false,
            strict: false,
            parallel: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
