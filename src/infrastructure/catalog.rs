// SPDX-License-Identifier: MPL-2.0
//! Static media catalogue implementing the [`MediaProbe`] port trait.
//!
//! Durations are declared up front instead of read from the file, which lets
//! the player run without a media backend.
//!
//! [`MediaProbe`]: crate::application::port::MediaProbe

use crate::application::port::{MediaInfo, MediaProbe, MediaResource};
use crate::domain::error::{LoadError, PlaybackError};
use std::collections::HashMap;
use std::path::Path;

/// Catalogue of known assets keyed by file name (`English.mp4`).
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    durations: HashMap<String, f64>,
}

impl StaticProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an asset and its duration in seconds.
    #[must_use]
    pub fn with_entry(mut self, file_name: impl Into<String>, duration_secs: f64) -> Self {
        self.durations.insert(file_name.into(), duration_secs);
        self
    }
}

impl MediaProbe for StaticProbe {
    fn probe(
        &self,
        _assets_dir: &Path,
        resource: &MediaResource,
    ) -> Result<MediaInfo, PlaybackError> {
        let file_name = resource.file_name();
        let duration_secs = *self
            .durations
            .get(&file_name)
            .ok_or_else(|| LoadError::NotFound(file_name.clone()))?;

        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(LoadError::Unreadable(format!("{file_name} has no duration")).into());
        }

        Ok(MediaInfo { duration_secs })
    }
}
