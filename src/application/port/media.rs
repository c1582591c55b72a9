// SPDX-License-Identifier: MPL-2.0
//! Media probing port definition.
//!
//! This module defines the [`MediaProbe`] trait used by playback controllers
//! to turn a [`MediaResource`] into the facts they need before playing it.
//! Infrastructure adapters (a static catalogue, `FFmpeg`) implement it.

use super::playback::MediaResource;
use crate::domain::error::PlaybackError;
use std::path::Path;

/// Facts about a resolved media asset.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaInfo {
    /// Total duration in seconds.
    pub duration_secs: f64,
}

/// Port for resolving and inspecting media assets.
///
/// Implementations must be `Send` so controllers can be moved onto the
/// thread that owns the UI.
pub trait MediaProbe: Send {
    /// Resolves `resource` relative to `assets_dir` and reads its duration.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Load`] if the asset is missing or its
    /// container cannot be read.
    fn probe(&self, assets_dir: &Path, resource: &MediaResource)
        -> Result<MediaInfo, PlaybackError>;
}
