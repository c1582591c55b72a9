// SPDX-License-Identifier: MPL-2.0
//! User interface for the player screen.
//!
//! The view is a pure function of a [`ScreenSnapshot`](crate::screen::ScreenSnapshot)
//! following the Elm-style "state down, messages up" pattern.
//!
//! - [`player_view`] - Video surface, control overlay and seek track
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod player_view;
pub mod styles;
