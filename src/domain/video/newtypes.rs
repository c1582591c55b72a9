// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values. Timing
//! values are clamped to valid ranges; [`ProgressRatio`] deliberately is not,
//! because a drag gesture may push the displayed progress past either end.

use crate::domain::error::PlaybackError;
use std::time::Duration;

// =============================================================================
// ProgressRatio
// =============================================================================

/// Playback position as a fraction of the total duration.
///
/// Nominally in `[0, 1]`. Values outside that range only appear transiently
/// while a seek gesture overshoots the track.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ProgressRatio(f64);

impl ProgressRatio {
    /// Progress at the very beginning.
    pub const START: Self = Self(0.0);

    /// Progress at end-of-media.
    pub const END: Self = Self(1.0);

    /// Creates a ratio from a raw value without clamping.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Computes `position / duration`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::DurationUnavailable`] when the duration is
    /// zero, negative or not a number.
    pub fn from_position(position_secs: f64, duration_secs: f64) -> Result<Self, PlaybackError> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(PlaybackError::DurationUnavailable);
        }
        Ok(Self(position_secs / duration_secs))
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the ratio clamped to `[0, 1]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self(self.0.clamp(0.0, 1.0))
    }

    /// Returns the ratio shifted by `delta` (unclamped).
    #[must_use]
    pub fn offset(self, delta: f64) -> Self {
        Self(self.0 + delta)
    }

    /// Returns true once the ratio reaches end-of-media.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 1.0
    }

    /// Returns true if the ratio lies outside `[0, 1]`.
    #[must_use]
    pub fn is_overshooting(self) -> bool {
        self.0 < 0.0 || self.0 > 1.0
    }

    /// Converts the ratio to a position in seconds for the given duration.
    #[must_use]
    pub fn to_position(self, duration_secs: f64) -> f64 {
        duration_secs * self.0
    }
}

// =============================================================================
// AutoHideDelay
// =============================================================================

/// Auto-hide delay bounds (in seconds).
pub mod auto_hide_bounds {
    /// Minimum delay before the overlay hides.
    pub const MIN: u32 = 1;
    /// Maximum delay before the overlay hides.
    pub const MAX: u32 = 30;
    /// Default delay before the overlay hides.
    pub const DEFAULT: u32 = 3;
}

/// Quiet period after which the control overlay hides itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoHideDelay(u32);

impl AutoHideDelay {
    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(auto_hide_bounds::MIN, auto_hide_bounds::MAX))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for AutoHideDelay {
    fn default() -> Self {
        Self(auto_hide_bounds::DEFAULT)
    }
}

// =============================================================================
// TickInterval
// =============================================================================

/// Tick interval bounds (in milliseconds).
pub mod tick_bounds {
    /// Fastest allowed position observer cadence.
    pub const MIN_MS: u64 = 50;
    /// Slowest allowed position observer cadence.
    pub const MAX_MS: u64 = 10_000;
    /// Default cadence (one tick per second of playback).
    pub const DEFAULT_MS: u64 = 1_000;
}

/// Cadence of the periodic position observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(tick_bounds::MIN_MS, tick_bounds::MAX_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(tick_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// SeekSettleDelay
// =============================================================================

/// Seek settle delay bounds (in milliseconds).
pub mod settle_bounds {
    /// Shortest allowed settle window.
    pub const MIN_MS: u64 = 0;
    /// Longest allowed settle window.
    pub const MAX_MS: u64 = 5_000;
    /// Default settle window after a seek commit.
    pub const DEFAULT_MS: u64 = 500;
}

/// Window after a seek commit during which ticks are still suppressed.
///
/// The platform seek completes asynchronously; ticks emitted before it lands
/// carry the pre-seek position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekSettleDelay(u64);

impl SeekSettleDelay {
    /// Creates a new settle delay, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(settle_bounds::MIN_MS, settle_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SeekSettleDelay {
    fn default() -> Self {
        Self(settle_bounds::DEFAULT_MS)
    }
}
