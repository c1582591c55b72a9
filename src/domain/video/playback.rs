// SPDX-License-Identifier: MPL-2.0
//! Playback status as seen by the player screen.

/// Playback status tracked by the screen.
///
/// The controller owns the actual playing flag; this is the screen's view of
/// it, updated by the commands it issues and by end-of-media ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// Not playing. Initial state after load.
    #[default]
    Paused,
    /// Playback is running.
    Playing,
    /// Playback reached end-of-media. Ticks are no longer acted upon.
    Finished,
}

impl PlaybackStatus {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if playback reached the end of the media.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}
