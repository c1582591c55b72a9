// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`clocked`]: In-process playback driven by elapsed time (implements [`PlaybackController`])
//! - [`catalog`]: Fixed duration catalogue (implements [`MediaProbe`])
//! - `ffmpeg`: Container probing via `FFmpeg`, behind the `ffmpeg` feature
//!
//! [`PlaybackController`]: crate::application::port::PlaybackController
//! [`MediaProbe`]: crate::application::port::MediaProbe

pub mod catalog;
pub mod clocked;
#[cfg(feature = "ffmpeg")]
pub mod ffmpeg;

pub use catalog::StaticProbe;
pub use clocked::ClockedController;
#[cfg(feature = "ffmpeg")]
pub use ffmpeg::FfmpegProbe;
