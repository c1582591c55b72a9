// SPDX-License-Identifier: MPL-2.0
//! Immutable render description of the player screen.
//!
//! A [`ScreenSnapshot`] is all a presentation layer needs to draw the
//! screen. It is produced by [`PlayerScreen::snapshot`] after every event and
//! never mutated.
//!
//! [`PlayerScreen::snapshot`]: super::PlayerScreen::snapshot

use crate::domain::video::ProgressRatio;

/// Progress track geometry, in logical pixels.
pub mod track {
    /// Height of the track and its fill.
    pub const HEIGHT: f32 = 3.0;
    /// Diameter of the visible seek handle.
    pub const HANDLE_SIZE: f32 = 16.0;
    /// Side of the square hit area around the handle.
    pub const HANDLE_HIT_SIZE: f32 = 50.0;
}

/// Icon shown on the central transport button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
}

/// Declarative description of one frame of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSnapshot {
    pub overlay_visible: bool,
    pub play_icon: PlayIcon,
    /// Displayed progress, unclamped while a drag overshoots.
    pub progress: ProgressRatio,
    /// Handle is drawn while the overlay is shown or a drag is active.
    pub handle_visible: bool,
    pub controls_enabled: bool,
    pub forward_enabled: bool,
    pub backward_enabled: bool,
    pub finished: bool,
    /// Human-readable reason the screen is not playable.
    pub error: Option<String>,
}

impl ScreenSnapshot {
    /// Width of the filled part of a track `track_width` wide.
    ///
    /// Clamped to the track so an overshooting drag never overflows it.
    #[must_use]
    pub fn fill_width(&self, track_width: f32) -> f32 {
        if track_width <= 0.0 {
            return 0.0;
        }
        #[allow(clippy::cast_possible_truncation)]
        let fill = track_width * self.progress.clamped().value() as f32;
        fill
    }

    /// Horizontal offset of the handle hit area from the track's leading edge.
    ///
    /// Centers the hit area on the progress point. Not clamped: the handle
    /// follows an overshooting drag past the track edges.
    #[must_use]
    pub fn handle_offset(&self, track_width: f32) -> f32 {
        #[allow(clippy::cast_possible_truncation)]
        let point = track_width * self.progress.value() as f32;
        point - track::HANDLE_HIT_SIZE / 2.0
    }

    /// Returns true if track-local `x` falls inside the handle hit area.
    #[must_use]
    pub fn hits_handle(&self, x: f32, track_width: f32) -> bool {
        let start = self.handle_offset(track_width);
        (start..=start + track::HANDLE_HIT_SIZE).contains(&x)
    }
}
