// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the player screen and media backends.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The screen state machine only talks to ports
//!
//! # Example
//!
//! ```ignore
//! use iced_reel::application::port::PlaybackController;
//!
//! // Infrastructure implements the port trait
//! struct PlatformPlayer { /* ... */ }
//! impl PlaybackController for PlatformPlayer { /* ... */ }
//! ```

pub mod port;
