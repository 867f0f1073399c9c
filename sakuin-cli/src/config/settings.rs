//! Settings configuration
//!
//! Manages user-configurable settings for the sakuin CLI.
//! Default values are defined in `config/default.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use sakuin_engine::VariantMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::batch::BatchFormat;

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

/// Configuration settings for the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Variant table selection
    pub variants: VariantSettings,
    /// Batch processing settings
    pub batch: BatchSettings,
    /// Output formatting settings
    pub output: OutputSettings,
}

/// Variant table settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantSettings {
    /// External variant table replacing the embedded one
    #[serde(default)]
    pub path: Option<String>,
}

/// Batch processing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSettings {
    /// Worker threads (0 = half of the available CPUs)
    pub threads: usize,
    /// Show a progress bar on stderr
    pub progress: bool,
    /// Output format
    #[serde(default)]
    pub format: BatchFormat,
}

/// Output formatting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

impl BatchSettings {
    /// Number of worker threads to use, resolving 0 to half of the available CPUs.
    pub fn worker_threads(&self) -> usize {
        if self.threads > 0 {
            return self.threads;
        }
        (std::thread::available_parallelism().map_or(4, |n| n.get()) / 2).max(1)
    }
}

/// Recursively merge `overlay` TOML values on top of `base`.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key.clone(), value.clone());
                }
            }
        }
        (base, _) => {
            *base = overlay.clone();
        }
    }
}

/// Parse user TOML content merged on top of default.toml.
fn parse_with_defaults(user_content: &str) -> Result<Settings> {
    let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
    let user: toml::Value = toml::from_str(user_content)?;
    merge_toml(&mut base, &user);
    let settings: Settings = base.try_into()?;
    Ok(settings)
}

/// Get the project directories for sakuin.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "sakuin", "sakuin")
}

impl Settings {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load settings from the default configuration file.
    /// Falls back to embedded default.toml if the config file does not exist.
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_file() else {
            warn!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_file.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&config_file)
    }

    /// Load settings from a specific file, merged on top of defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        parse_with_defaults(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load the configured external variant table.
    ///
    /// Returns `None` when the embedded table should be used.
    pub fn load_variants(&self) -> Result<Option<VariantMap>> {
        let Some(path) = &self.variants.path else {
            return Ok(None);
        };
        let variants = VariantMap::load(path)
            .with_context(|| format!("Failed to load variant table {path}"))?;
        Ok(Some(variants))
    }
}
