// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: optional defaults
//! for the scan root, report format, report destination and HTML template,
//! stored in a `settings.toml` file.
//!
//! Command-line flags always take precedence over these values.
//!
//! # Examples
//!
//! ```no_run
//! use exif_locator::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.output_format = Some("html".to_string());
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.output_format, Some("html".to_string()));
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub use defaults::{
    DEFAULT_OUTPUT_FILE, DEFAULT_OUTPUT_FORMAT, DEFAULT_ROOT, DEFAULT_TEMPLATE_PATH,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ExifLocator";

/// Environment variable to override the directory holding `settings.toml`.
pub const ENV_CONFIG_DIR: &str = "EXIF_LOCATOR_CONFIG_DIR";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

/// Resolves the settings file location.
///
/// 1. `EXIF_LOCATOR_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform config directory with the app name appended
fn get_default_config_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path).join(CONFIG_FILE));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the settings file from the platform config directory, or the
/// defaults when it doesn't exist or cannot be read.
pub fn load() -> Result<Config> {
    Ok(get_default_config_path()
        .map(|path| load_implicit(&path))
        .unwrap_or_default())
}

/// Settings found by lookup are optional: a missing or unreadable file
/// yields the defaults instead of an error.
fn load_implicit(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    load_from_path(path).unwrap_or_else(|err| {
        warn!(path = %path.display(), error = %err, "cannot read settings file, using defaults");
        Config::default()
    })
}

/// Reads a settings file. Unparseable content falls back to the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
