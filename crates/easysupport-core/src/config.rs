//! Tracker configuration with TOML loading and serde defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::persist::DEFAULT_STORAGE_KEY;
use crate::query::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Tickets revealed per "load more" step.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Pause after the last keystroke before the search fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Key the snapshot is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            storage_key: default_storage_key(),
        }
    }
}

impl TrackerConfig {
    #[must_use]
    pub const fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Load configuration from `path`. A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<TrackerConfig> {
    if !path.exists() {
        return Ok(TrackerConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<TrackerConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Path of the per-user config file, when a config directory exists.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("easysupport/config.toml"))
}

/// Load the per-user configuration, falling back to defaults when no
/// config directory or file is present.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<TrackerConfig> {
    match user_config_path() {
        Some(path) => load_config(&path),
        None => Ok(TrackerConfig::default()),
    }
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

const fn default_debounce_ms() -> u64 {
    1000
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
