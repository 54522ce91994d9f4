//! Configuration schema for tailwindcss-bin
//!
//! Configuration is stored at `~/.config/tailwindcss-bin/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Executable location settings
    pub binary: BinaryConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Where the executable and its cache live
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BinaryConfig {
    /// Explicit executable, bypasses resolution and download
    pub path: Option<PathBuf>,

    /// Directory to download into
    pub dir: Option<PathBuf>,

    /// Cache root
    pub cache_dir: Option<PathBuf>,
}
