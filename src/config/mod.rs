// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[layout]` - Two-pane breakpoint and title bar visibility
//! - `[window]` - Initial window size
//!
//! Configuration is read-only: the gallery never writes it back.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()`
//! 3. Set `ART_SPACE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use art_space::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("config problem: {key}");
//! }
//! println!("{:?}", config.layout.medium_breakpoint);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::layout::Breakpoints;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// I18n key of the warning shown when the config file cannot be parsed.
pub const LOAD_ERROR_KEY: &str = "warning-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Adaptive layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Width (logical pixels) at which the second pane appears.
    #[serde(
        default = "default_medium_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub medium_breakpoint: Option<f32>,

    /// Whether the title bar is shown in portrait orientation.
    #[serde(
        default = "default_show_top_bar",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_top_bar: Option<bool>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            medium_breakpoint: default_medium_breakpoint(),
            show_top_bar: default_show_top_bar(),
        }
    }
}

impl LayoutConfig {
    /// Resolves the configured breakpoint, clamping out-of-range values.
    #[must_use]
    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints::new(self.medium_breakpoint.unwrap_or(DEFAULT_MEDIUM_BREAKPOINT))
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(
        default = "default_window_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl WindowConfig {
    /// Returns `(width, height)`, never smaller than the minimum window size.
    ///
    /// Non-finite values (`inf`, `nan` are valid TOML floats) use the defaults.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        let width = finite_or(self.width, DEFAULT_WINDOW_WIDTH);
        let height = finite_or(self.height, DEFAULT_WINDOW_HEIGHT);
        (width.max(MIN_WINDOW_WIDTH), height.max(MIN_WINDOW_HEIGHT))
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_medium_breakpoint() -> Option<f32> {
    Some(DEFAULT_MEDIUM_BREAKPOINT)
}

fn default_show_top_bar() -> Option<bool> {
    Some(DEFAULT_SHOW_TOP_BAR)
}

fn default_window_width() -> Option<f32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<f32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

fn finite_or(value: Option<f32>, default: f32) -> f32 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
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
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If the file exists but
/// cannot be read, the default config is returned with [`LOAD_ERROR_KEY`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded configuration");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), "{err}; using defaults");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.layout.medium_breakpoint, Some(600.0));
        assert_eq!(config.layout.show_top_bar, Some(true));
        assert_eq!(config.window.size(), (800.0, 650.0));
    }

    #[test]
    fn sectioned_format_loads_correctly() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
language = "fr"
theme_mode = "Dark"

[layout]
medium_breakpoint = 720.0
show_top_bar = false

[window]
width = 1024.0
height = 768.0
"#,
        )
        .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.layout.breakpoints().medium(), 720.0);
        assert_eq!(config.layout.show_top_bar, Some(false));
        assert_eq!(config.window.size(), (1024.0, 768.0));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n").expect("write");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").expect("write");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("sepia")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[ broken").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn tiny_window_is_raised_to_minimum() {
        let window = WindowConfig {
            width: Some(100.0),
            height: Some(100.0),
        };
        assert_eq!(window.size(), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn non_finite_window_size_uses_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[window]\nwidth = inf\nheight = nan\n").expect("write");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(
            config.window.size(),
            (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
        );

        let negative = WindowConfig {
            width: Some(f32::NEG_INFINITY),
            height: Some(700.0),
        };
        assert_eq!(negative.size(), (DEFAULT_WINDOW_WIDTH, 700.0));
    }

    #[test]
    fn out_of_range_breakpoint_is_clamped() {
        let layout = LayoutConfig {
            medium_breakpoint: Some(10_000.0),
            show_top_bar: None,
        };
        assert_eq!(layout.breakpoints().medium(), MAX_MEDIUM_BREAKPOINT);
    }
}
