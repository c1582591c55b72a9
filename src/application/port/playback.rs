// SPDX-License-Identifier: MPL-2.0
//! Playback controller port definition.
//!
//! This module defines the [`PlaybackController`] trait, the boundary between
//! the player screen and the platform's media-playback facility. Any backend
//! exposing load/play/pause/seek/position-subscribe can implement it.
//!
//! # Design Notes
//!
//! - Commands are fire-and-forget: their completion is observed through
//!   subsequent ticks, never by blocking
//! - Duration is read fresh on every call; it may be unknown until the asset
//!   finishes loading its metadata
//! - Seeks are clamped into `[0, duration]` by the implementation
//! - Uses domain types only (`ProgressRatio`, `PlaybackError`)

use crate::domain::error::{LoadError, PlaybackError};
use crate::domain::video::{ProgressRatio, TickInterval};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Value types
// =============================================================================

/// A bundled media asset identified by name and type, e.g. `English` / `mp4`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaResource {
    name: String,
    kind: String,
}

impl MediaResource {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File extension of the asset (`mp4`, `mov`, ...).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// File name under the asset directory.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.kind)
    }
}

impl fmt::Display for MediaResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.kind)
    }
}

impl FromStr for MediaResource {
    type Err = PlaybackError;

    /// Parses `name.kind`. The last dot separates name from kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('.') {
            Some((name, kind)) if !name.is_empty() && !kind.is_empty() => {
                Ok(Self::new(name, kind))
            }
            _ => Err(LoadError::NotFound(s.to_string()).into()),
        }
    }
}

/// Opaque reference to a loaded media item.
///
/// Only the controller that issued it can interpret it. Not `Clone`: the
/// screen owns exactly one for its lifetime and hands it back on release.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PlaybackHandle(u64);

impl PlaybackHandle {
    /// Creates a handle. Intended for controller implementations.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Token identifying a periodic observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

impl SubscriptionToken {
    /// Creates a token. Intended for controller implementations.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Periodic position report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Current playback position in seconds.
    pub position_secs: f64,
    /// Total duration in seconds, `None` while metadata is still loading.
    pub duration_secs: Option<f64>,
}

impl Tick {
    /// Returns `position / duration` for this tick.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::DurationUnavailable`] if the duration is
    /// unknown or zero.
    pub fn progress(&self) -> Result<ProgressRatio, PlaybackError> {
        let duration = self
            .duration_secs
            .ok_or(PlaybackError::DurationUnavailable)?;
        ProgressRatio::from_position(self.position_secs, duration)
    }
}

/// Callback invoked for every tick of a subscription.
pub type TickCallback = Box<dyn FnMut(Tick) + Send>;

// =============================================================================
// PlaybackController Trait
// =============================================================================

/// Port for the external media player.
///
/// # Lifecycle
///
/// 1. `load()` a resource to obtain a [`PlaybackHandle`]
/// 2. `subscribe()` a periodic observer
/// 3. Issue `play()` / `pause()` / `seek()` commands
/// 4. `unsubscribe()` and `release()` the handle on teardown
///
/// Every handle-taking method fails with [`PlaybackError::InvalidHandle`]
/// once the handle has been released.
pub trait PlaybackController {
    /// Resolves a resource to a playable handle.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Load`] if the asset is missing or unreadable.
    fn load(&mut self, resource: &MediaResource) -> Result<PlaybackHandle, PlaybackError>;

    /// Starts playback. No-op if already playing.
    fn play(&mut self, handle: &PlaybackHandle) -> Result<(), PlaybackError>;

    /// Pauses playback. No-op if already paused.
    fn pause(&mut self, handle: &PlaybackHandle) -> Result<(), PlaybackError>;

    /// Returns whether the item is currently playing.
    fn is_playing(&self, handle: &PlaybackHandle) -> Result<bool, PlaybackError>;

    /// Repositions playback, clamping the target into `[0, duration]`.
    ///
    /// Returns the position actually applied.
    fn seek(&mut self, handle: &PlaybackHandle, target_secs: f64) -> Result<f64, PlaybackError>;

    /// Returns the current position in seconds.
    fn position(&self, handle: &PlaybackHandle) -> Result<f64, PlaybackError>;

    /// Returns the total duration in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::DurationUnavailable`] while metadata is unknown.
    fn duration(&self, handle: &PlaybackHandle) -> Result<f64, PlaybackError>;

    /// Returns `position / duration`.
    fn current_progress(&self, handle: &PlaybackHandle) -> Result<ProgressRatio, PlaybackError> {
        let duration = self.duration(handle)?;
        let position = self.position(handle)?;
        ProgressRatio::from_position(position, duration)
    }

    /// Registers a periodic observer firing roughly every `interval` of
    /// playback time while not paused.
    fn subscribe(
        &mut self,
        handle: &PlaybackHandle,
        interval: TickInterval,
        callback: TickCallback,
    ) -> Result<SubscriptionToken, PlaybackError>;

    /// Stops delivery for the given subscription. Unknown tokens are ignored.
    fn unsubscribe(&mut self, token: SubscriptionToken);

    /// Releases the handle and everything attached to it.
    fn release(&mut self, handle: PlaybackHandle);
}
