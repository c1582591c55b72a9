// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the player screen remains
//! independent of concrete media backends.
//!
//! # Available Ports
//!
//! - [`playback`]: Playback control and periodic position observation
//! - [`media`]: Asset resolution and duration probing
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Methods return `Result` with domain error types
//! - No `async fn` - completion of commands is observed through ticks

pub mod media;
pub mod playback;

// Re-export main types for convenience
pub use media::{MediaInfo, MediaProbe};
pub use playback::{
    MediaResource, PlaybackController, PlaybackHandle, SubscriptionToken, Tick, TickCallback,
};
