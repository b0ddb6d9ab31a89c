// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! user-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[library]` - Which directory is the photo library, and whether to recurse
//! - `[display]` - Card size and backdrop blur
//!
//! Swipe thresholds are fixed and deliberately absent from the file.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` CLI argument, then `PHOTO_SWIPE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use photo_swipe::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("card size: {:?}", config.card_size());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::display::{BlurSigma, CardEdge};
use crate::domain::TargetSize;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "it").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Photo library location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryConfig {
    /// Library root directory. Unset means the platform pictures folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Whether photos in subdirectories are included.
    #[serde(default = "default_recursive", skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            root: None,
            recursive: default_recursive(),
        }
    }
}

/// Card display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_card_width", skip_serializing_if = "Option::is_none")]
    pub card_width: Option<u32>,

    #[serde(default = "default_card_height", skip_serializing_if = "Option::is_none")]
    pub card_height: Option<u32>,

    /// Gaussian blur sigma for the backdrop behind the card.
    #[serde(
        default = "default_backdrop_blur",
        skip_serializing_if = "Option::is_none"
    )]
    pub backdrop_blur: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            card_width: default_card_width(),
            card_height: default_card_height(),
            backdrop_blur: default_backdrop_blur(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Card size with out-of-range values clamped.
    #[must_use]
    pub fn card_size(&self) -> TargetSize {
        let width = CardEdge::new(self.display.card_width.unwrap_or(DEFAULT_CARD_WIDTH));
        let height = CardEdge::new(self.display.card_height.unwrap_or(DEFAULT_CARD_HEIGHT));
        TargetSize::new(width.value(), height.value())
    }

    /// Backdrop blur with out-of-range values clamped.
    #[must_use]
    pub fn backdrop_blur(&self) -> BlurSigma {
        BlurSigma::new(self.display.backdrop_blur.unwrap_or(DEFAULT_BACKDROP_BLUR))
    }

    #[must_use]
    pub fn recursive(&self) -> bool {
        self.library.recursive.unwrap_or(true)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_recursive() -> Option<bool> {
    Some(true)
}

fn default_card_width() -> Option<u32> {
    Some(DEFAULT_CARD_WIDTH)
}

fn default_card_height() -> Option<u32> {
    Some(DEFAULT_CARD_HEIGHT)
}

fn default_backdrop_blur() -> Option<f32> {
    Some(DEFAULT_BACKDROP_BLUR)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|path| path.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (
                    Config::default(),
                    Some("notification-config-load-error".to_string()),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
