// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::DEFAULT_RESOURCE;
use crate::screen;
use std::path::PathBuf;
use std::time::Instant;

/// Pointer input on the progress track, in track-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackInput {
    /// Cursor moved over the track strip.
    Moved { x: f32, track_width: f32 },
    Pressed,
    Released,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input already expressed as a screen event (taps, buttons).
    Screen(screen::Event),
    Track(TrackInput),
    /// Space bar: direct play/pause toggle.
    TogglePlayback,
    /// Periodic tick advancing the playback clock and polling timers.
    Frame(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Media resource to play, as `name.kind`.
    pub resource: String,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_REEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
    /// Optional asset directory, overriding `[playback] assets_dir`.
    pub assets_dir: Option<PathBuf>,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            resource: DEFAULT_RESOURCE.to_string(),
            config_dir: None,
            assets_dir: None,
        }
    }
}
