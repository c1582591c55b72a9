// SPDX-License-Identifier: MPL-2.0
//! Test utilities for progress comparisons and a recording playback controller.
//!
//! Float assertions come from the `approx` crate, which handles precision
//! issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::application::port::{
    MediaResource, PlaybackController, PlaybackHandle, SubscriptionToken, Tick, TickCallback,
};
use crate::domain::error::{LoadError, PlaybackError};
use crate::domain::video::TickInterval;

/// Default epsilon for f64 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F64_EPSILON: f64 = 1e-10;

/// Command observed by [`RecordingController`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Seek(f64),
    Unsubscribe,
    Release,
}

/// Controller double that records every command and lets tests fire ticks
/// through the registered callback.
pub struct RecordingController {
    pub duration_secs: Option<f64>,
    pub position_secs: f64,
    pub playing: bool,
    pub commands: Vec<Command>,
    pub fail_load: bool,
    pub fail_commands: bool,
    pub fail_subscribe: bool,
    callback: Option<TickCallback>,
}

impl RecordingController {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs: Some(duration_secs),
            position_secs: 0.0,
            playing: false,
            commands: Vec::new(),
            fail_load: false,
            fail_commands: false,
            fail_subscribe: false,
            callback: None,
        }
    }

    /// Delivers a tick through the subscription callback, if any.
    pub fn emit(&mut self, position_secs: f64, duration_secs: Option<f64>) {
        if let Some(callback) = self.callback.as_mut() {
            callback(Tick {
                position_secs,
                duration_secs,
            });
        }
    }

    pub fn has_subscription(&self) -> bool {
        self.callback.is_some()
    }

    pub fn count(&self, command: &Command) -> usize {
        self.commands.iter().filter(|c| *c == command).count()
    }

    pub fn seeks(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Seek(secs) => Some(*secs),
                _ => None,
            })
            .collect()
    }

    fn check(&self) -> Result<(), PlaybackError> {
        if self.fail_commands {
            Err(PlaybackError::InvalidHandle)
        } else {
            Ok(())
        }
    }
}

impl PlaybackController for RecordingController {
    fn load(&mut self, resource: &MediaResource) -> Result<PlaybackHandle, PlaybackError> {
        if self.fail_load {
            return Err(LoadError::NotFound(resource.to_string()).into());
        }
        Ok(PlaybackHandle::new(1))
    }

    fn play(&mut self, _handle: &PlaybackHandle) -> Result<(), PlaybackError> {
        self.check()?;
        if !self.playing {
            self.playing = true;
            self.commands.push(Command::Play);
        }
        Ok(())
    }

    fn pause(&mut self, _handle: &PlaybackHandle) -> Result<(), PlaybackError> {
        self.check()?;
        if self.playing {
            self.playing = false;
            self.commands.push(Command::Pause);
        }
        Ok(())
    }

    fn is_playing(&self, _handle: &PlaybackHandle) -> Result<bool, PlaybackError> {
        Ok(self.playing)
    }

    fn seek(&mut self, _handle: &PlaybackHandle, target_secs: f64) -> Result<f64, PlaybackError> {
        self.check()?;
        let duration = self.duration_secs.unwrap_or(0.0);
        let applied = target_secs.clamp(0.0, duration);
        self.position_secs = applied;
        self.commands.push(Command::Seek(target_secs));
        Ok(applied)
    }

    fn position(&self, _handle: &PlaybackHandle) -> Result<f64, PlaybackError> {
        Ok(self.position_secs)
    }

    fn duration(&self, _handle: &PlaybackHandle) -> Result<f64, PlaybackError> {
        self.duration_secs
            .filter(|d| *d > 0.0)
            .ok_or(PlaybackError::DurationUnavailable)
    }

    fn subscribe(
        &mut self,
        _handle: &PlaybackHandle,
        _interval: TickInterval,
        callback: TickCallback,
    ) -> Result<SubscriptionToken, PlaybackError> {
        if self.fail_subscribe {
            return Err(PlaybackError::InvalidHandle);
        }
        self.callback = Some(callback);
        Ok(SubscriptionToken::new(1))
    }

    fn unsubscribe(&mut self, _token: SubscriptionToken) {
        self.callback = None;
        self.commands.push(Command::Unsubscribe);
    }

    fn release(&mut self, _handle: PlaybackHandle) {
        self.commands.push(Command::Release);
    }
}
