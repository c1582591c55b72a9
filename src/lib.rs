// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a single-video playback screen built with the Iced GUI
//! framework.
//!
//! Tapping the video reveals transport controls that hide again after a few
//! seconds of playback. Dragging the handle on the progress track previews the
//! new position and seeks once on release.
//!
//! # Layers
//!
//! - [`domain`] - Playback value types and errors, no external dependencies
//! - [`application`] - The [`PlaybackController`](application::port::PlaybackController) port
//! - [`infrastructure`] - Controller and probe adapters
//! - [`screen`] - The framework-free interaction state machine
//! - [`app`] and [`ui`] - Iced runtime wiring and rendering

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod screen;
pub mod ui;

#[cfg(test)]
mod test_utils;
