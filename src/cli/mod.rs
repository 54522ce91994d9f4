//! Command-line front end

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};

use crate::config::Config;
use crate::provisioner::{default_cache_dir, TailwindOptions};
use std::path::PathBuf;

/// Executable settings after merging CLI flags over the config file
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub bin_path: Option<PathBuf>,
    pub bin_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
}

impl Settings {
    /// Merge CLI flags (which win) with config file values
    pub fn merge(cli: &Cli, config: &Config) -> Self {
        Self {
            bin_path: cli.bin_path.clone().or_else(|| config.binary.path.clone()),
            bin_dir: cli.bin_dir.clone().or_else(|| config.binary.dir.clone()),
            cache_dir: cli.cache_dir.clone().or_else(|| config.binary.cache_dir.clone()),
        }
    }

    /// Provisioner options for these settings
    pub fn options(&self) -> TailwindOptions {
        TailwindOptions {
            bin_path: self.bin_path.clone(),
            bin_dir: self.bin_dir.clone(),
            cache_dir: self.cache_dir.clone(),
            ..TailwindOptions::default()
        }
    }

    /// Effective cache root
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(default_cache_dir)
    }
}
