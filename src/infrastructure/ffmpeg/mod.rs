// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter implementing the [`MediaProbe`] port trait.
//!
//! Only container metadata is read; decoding and rendering stay with the
//! platform player.
//!
//! [`MediaProbe`]: crate::application::port::MediaProbe

use crate::application::port::{MediaInfo, MediaProbe, MediaResource};
use crate::domain::error::{LoadError, PlaybackError};
use std::path::Path;
use std::sync::OnceLock;

/// Outcome of the one-time FFmpeg initialization, shared by every probe.
static FFMPEG_INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Initialize FFmpeg with log output limited to errors.
fn init_ffmpeg() -> Result<(), PlaybackError> {
    init_once(&FFMPEG_INIT, || {
        ffmpeg_next::init().map_err(|e| format!("FFmpeg initialization failed: {e}"))?;
        ffmpeg_next::log::set_level(ffmpeg_next::log::Level::Error);
        Ok(())
    })
}

/// Runs `init` on first use and replays its outcome, failures included.
fn init_once(
    cell: &OnceLock<Result<(), String>>,
    init: impl FnOnce() -> Result<(), String>,
) -> Result<(), PlaybackError> {
    cell.get_or_init(init)
        .clone()
        .map_err(|message| LoadError::Unreadable(message).into())
}

/// Reads asset durations from the container header.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegProbe;

impl FfmpegProbe {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MediaProbe for FfmpegProbe {
    fn probe(
        &self,
        assets_dir: &Path,
        resource: &MediaResource,
    ) -> Result<MediaInfo, PlaybackError> {
        let path = assets_dir.join(resource.file_name());
        if !path.is_file() {
            return Err(LoadError::NotFound(path.display().to_string()).into());
        }

        init_ffmpeg()?;

        let input_context = ffmpeg_next::format::input(&path)
            .map_err(|e| LoadError::Unreadable(format!("Failed to open video: {e}")))?;

        if input_context
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .is_none()
        {
            return Err(LoadError::Unreadable("No video stream found".to_string()).into());
        }

        #[allow(clippy::cast_precision_loss)]
        let duration_secs =
            input_context.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE);

        if duration_secs <= 0.0 {
            return Err(LoadError::Unreadable("Container reports no duration".to_string()).into());
        }

        Ok(MediaInfo { duration_secs })
    }
}
