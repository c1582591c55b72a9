// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Playback**: Start progress, tick cadence, asset location
//! - **Overlay**: Control overlay auto-hide delay
//! - **Seek**: Post-commit settle window

use crate::domain::video::newtypes::{auto_hide_bounds, settle_bounds, tick_bounds};

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Displayed progress before the first tick arrives.
pub const DEFAULT_START_PROGRESS: f64 = crate::screen::DEFAULT_START_PROGRESS;

/// Minimum start progress.
pub const MIN_START_PROGRESS: f64 = 0.0;

/// Maximum start progress.
pub const MAX_START_PROGRESS: f64 = 1.0;

/// Default interval between position ticks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = tick_bounds::DEFAULT_MS;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = tick_bounds::MIN_MS;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = tick_bounds::MAX_MS;

/// Default directory holding the bundled media, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Resource played when none is given on the command line.
pub const DEFAULT_RESOURCE: &str = "English.mp4";

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default auto-hide delay for the control overlay (in seconds).
pub const DEFAULT_AUTO_HIDE_SECS: u32 = auto_hide_bounds::DEFAULT;

/// Minimum auto-hide delay (in seconds).
pub const MIN_AUTO_HIDE_SECS: u32 = auto_hide_bounds::MIN;

/// Maximum auto-hide delay (in seconds).
pub const MAX_AUTO_HIDE_SECS: u32 = auto_hide_bounds::MAX;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Default settle window after a seek commit (in milliseconds).
pub const DEFAULT_SETTLE_MS: u64 = settle_bounds::DEFAULT_MS;

/// Minimum settle window (in milliseconds).
pub const MIN_SETTLE_MS: u64 = settle_bounds::MIN_MS;

/// Maximum settle window (in milliseconds).
pub const MAX_SETTLE_MS: u64 = settle_bounds::MAX_MS;
