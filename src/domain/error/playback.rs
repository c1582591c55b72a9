// SPDX-License-Identifier: MPL-2.0
//! Playback error taxonomy.
//!
//! Out-of-range seeks have no variant here: the controller clamps them
//! silently and they are never surfaced to the screen.

use std::fmt;

/// Why a media resource could not be turned into a playable handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The resource does not exist in the asset directory.
    NotFound(String),

    /// The resource exists but its container could not be read.
    Unreadable(String),
}

/// Errors reported by a playback controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Loading the asset failed. Fatal for the screen instance.
    Load(LoadError),

    /// Duration is zero or not known yet (metadata still loading).
    /// Consumers treat this as "skip this tick", never as a user-facing error.
    DurationUnavailable,

    /// The handle is unknown to the controller or was already released.
    InvalidHandle,
}

impl PlaybackError {
    /// Returns true if this error should disable the controls.
    ///
    /// `DurationUnavailable` is transient and absorbed by the caller.
    #[must_use]
    pub fn disables_controls(&self) -> bool {
        !matches!(self, Self::DurationUnavailable)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(resource) => write!(f, "Media resource not found: {}", resource),
            LoadError::Unreadable(reason) => write!(f, "Media resource unreadable: {}", reason),
        }
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Load(e) => write!(f, "{}", e),
            PlaybackError::DurationUnavailable => write!(f, "Media duration is not available"),
            PlaybackError::InvalidHandle => write!(f, "Playback handle is no longer valid"),
        }
    }
}

impl From<LoadError> for PlaybackError {
    fn from(err: LoadError) -> Self {
        PlaybackError::Load(err)
    }
}
