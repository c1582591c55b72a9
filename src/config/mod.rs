// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[playback]` - Start progress, tick interval and asset directory
//! - `[overlay]` - Control overlay auto-hide delay
//! - `[seek]` - Settle window after a drag-to-seek commit
//!
//! Every field is optional. Missing fields take the values from [`defaults`];
//! out-of-range values are clamped when converted to [`ScreenSettings`].
//!
//! # Path Resolution
//!
//! See [`paths`]: explicit override, then `ICED_REEL_CONFIG_DIR`, then the
//! platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let settings = config.screen_settings();
//! assert!(settings.start_progress.value() <= 1.0);
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::video::{AutoHideDelay, ProgressRatio, SeekSettleDelay, TickInterval};
use crate::error::{Error, Result};
use crate::screen::ScreenSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Progress shown before the first position tick (0.0 to 1.0).
    #[serde(
        default = "default_start_progress",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_progress: Option<f64>,

    /// Interval between position ticks in milliseconds.
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,

    /// Directory media resources are resolved in.
    #[serde(default = "default_assets_dir", skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            start_progress: default_start_progress(),
            tick_interval_ms: default_tick_interval_ms(),
            assets_dir: default_assets_dir(),
        }
    }
}

/// Control overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Auto-hide delay after play or seek (seconds).
    #[serde(
        default = "default_auto_hide_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_hide_secs: Option<u32>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            auto_hide_secs: default_auto_hide_secs(),
        }
    }
}

/// Drag-to-seek settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeekConfig {
    /// Window after a seek commit during which ticks are ignored (milliseconds).
    #[serde(default = "default_settle_ms", skip_serializing_if = "Option::is_none")]
    pub settle_ms: Option<u64>,
}

impl Default for SeekConfig {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Player configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,

    #[serde(default)]
    pub seek: SeekConfig,
}

impl Config {
    /// Converts the configuration to screen tunables, clamping every value.
    #[must_use]
    pub fn screen_settings(&self) -> ScreenSettings {
        let start = self
            .playback
            .start_progress
            .filter(|p| p.is_finite())
            .unwrap_or(DEFAULT_START_PROGRESS)
            .clamp(MIN_START_PROGRESS, MAX_START_PROGRESS);

        ScreenSettings {
            start_progress: ProgressRatio::new(start),
            tick_interval: TickInterval::from_millis(
                self.playback
                    .tick_interval_ms
                    .unwrap_or(DEFAULT_TICK_INTERVAL_MS),
            ),
            auto_hide: AutoHideDelay::new(
                self.overlay.auto_hide_secs.unwrap_or(DEFAULT_AUTO_HIDE_SECS),
            ),
            settle: SeekSettleDelay::from_millis(self.seek.settle_ms.unwrap_or(DEFAULT_SETTLE_MS)),
        }
    }

    /// Directory media resources are resolved in.
    #[must_use]
    pub fn assets_dir(&self) -> PathBuf {
        self.playback
            .assets_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_start_progress() -> Option<f64> {
    Some(DEFAULT_START_PROGRESS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_assets_dir() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_ASSETS_DIR))
}

#[allow(clippy::unnecessary_wraps)]
fn default_auto_hide_secs() -> Option<u32> {
    Some(DEFAULT_AUTO_HIDE_SECS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_settle_ms() -> Option<u64> {
    Some(DEFAULT_SETTLE_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Ignoring unreadable config");
                    return (
                        Config::default(),
                        Some(format!(
                            "Could not read {}, using defaults: {}",
                            path.display(),
                            err
                        )),
                    );
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
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
