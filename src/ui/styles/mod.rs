// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the player screen widgets.

pub mod button;
pub mod container;
