//! This module handles the picker's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use asset_picker::config::{self, PickerConfig};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.max_preview_dimension = Some(800.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "AssetPicker";

/// Maximum logical dimension (points) used when sizing preview requests.
pub const DEFAULT_MAX_PREVIEW_DIMENSION: f32 = 600.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Upper bound on the logical edge used for preview sizing.
    #[serde(default)]
    pub max_preview_dimension: Option<f32>,
    /// Directory receiving re-exported video files. Falls back to the
    /// system temporary directory when unset.
    #[serde(default)]
    pub video_export_dir: Option<PathBuf>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            max_preview_dimension: Some(DEFAULT_MAX_PREVIEW_DIMENSION),
            video_export_dir: None,
        }
    }
}

impl PickerConfig {
    /// Effective maximum preview dimension, applying the default when unset.
    #[must_use]
    pub fn max_preview_dimension(&self) -> f32 {
        self.max_preview_dimension
            .unwrap_or(DEFAULT_MAX_PREVIEW_DIMENSION)
    }

    /// Effective export directory, applying the temp-dir fallback when unset.
    #[must_use]
    pub fn video_export_dir(&self) -> PathBuf {
        self.video_export_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<PickerConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(PickerConfig::default())
}

pub fn save(config: &PickerConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<PickerConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &PickerConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
