// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`PlaybackError`](error::PlaybackError))
//! - [`video`]: Playback types ([`PlaybackStatus`](video::PlaybackStatus),
//!   [`ProgressRatio`](video::ProgressRatio), [`AutoHideDelay`](video::AutoHideDelay))

pub mod error;
pub mod video;
