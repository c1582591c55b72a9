// SPDX-License-Identifier: MPL-2.0
//! Clock-driven playback controller implementing the [`PlaybackController`]
//! port.
//!
//! Playback time only moves when the host calls [`ClockedController::advance`]
//! with the wall time that elapsed since the previous call. This keeps the
//! controller single-threaded and deterministic: ticks are delivered from
//! inside `advance`, on the caller's thread.
//!
//! # Tick cadence
//!
//! Each subscription fires once per `interval` of accumulated *playing* time,
//! carrying the interpolated position at that instant. Paused items deliver
//! nothing. When an item reaches end-of-media it stops and every subscription
//! receives one final tick with `position == duration`.
//!
//! [`PlaybackController`]: crate::application::port::PlaybackController

use crate::application::port::{
    MediaProbe, MediaResource, PlaybackController, PlaybackHandle, SubscriptionToken, Tick,
    TickCallback,
};
use crate::domain::error::PlaybackError;
use crate::domain::video::TickInterval;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// State of one loaded item.
#[derive(Debug, Clone)]
struct Item {
    duration_secs: f64,
    position_secs: f64,
    playing: bool,
    /// Wall time advanced since load, used to emulate metadata latency.
    since_load: Duration,
}

struct Observer {
    handle_id: u64,
    interval_secs: f64,
    /// Playing time accumulated since the last tick.
    accumulated_secs: f64,
    callback: TickCallback,
}

/// Per-item outcome of one `advance` step.
struct Step {
    handle_id: u64,
    start_secs: f64,
    played_secs: f64,
    reached_end: bool,
    reported_duration: Option<f64>,
}

/// In-process playback controller driven by elapsed time.
pub struct ClockedController {
    probe: Box<dyn MediaProbe>,
    assets_dir: PathBuf,
    metadata_latency: Duration,
    next_id: u64,
    items: HashMap<u64, Item>,
    observers: HashMap<u64, Observer>,
}

impl std::fmt::Debug for ClockedController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockedController")
            .field("assets_dir", &self.assets_dir)
            .field("items", &self.items.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ClockedController {
    /// Creates a controller resolving assets under `assets_dir` through `probe`.
    pub fn new(probe: Box<dyn MediaProbe>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            probe,
            assets_dir: assets_dir.into(),
            metadata_latency: Duration::ZERO,
            next_id: 1,
            items: HashMap::new(),
            observers: HashMap::new(),
        }
    }

    /// Reports the duration as unknown until `latency` of wall time has been
    /// advanced after load.
    #[must_use]
    pub fn with_metadata_latency(mut self, latency: Duration) -> Self {
        self.metadata_latency = latency;
        self
    }

    /// Returns true if any loaded item is currently playing.
    #[must_use]
    pub fn has_playing_item(&self) -> bool {
        self.items.values().any(|item| item.playing)
    }

    /// Returns true while any item still has pending metadata.
    #[must_use]
    pub fn has_pending_metadata(&self) -> bool {
        self.items
            .values()
            .any(|item| item.since_load < self.metadata_latency)
    }

    /// Advances every loaded item by `elapsed` and delivers due ticks.
    pub fn advance(&mut self, elapsed: Duration) {
        let elapsed_secs = elapsed.as_secs_f64();
        let mut steps = Vec::with_capacity(self.items.len());

        for (&handle_id, item) in &mut self.items {
            item.since_load += elapsed;
            let start_secs = item.position_secs;
            let mut played_secs = 0.0;
            let mut reached_end = false;

            if item.playing {
                played_secs = elapsed_secs.min(item.duration_secs - start_secs).max(0.0);
                item.position_secs = start_secs + played_secs;
                if item.position_secs >= item.duration_secs {
                    item.position_secs = item.duration_secs;
                    item.playing = false;
                    reached_end = true;
                    info!(handle = handle_id, "Playback reached end of media");
                }
            }

            let reported_duration =
                (item.since_load >= self.metadata_latency).then_some(item.duration_secs);

            steps.push(Step {
                handle_id,
                start_secs,
                played_secs,
                reached_end,
                reported_duration,
            });
        }

        for step in steps {
            for observer in self
                .observers
                .values_mut()
                .filter(|o| o.handle_id == step.handle_id)
            {
                deliver(observer, &step);
            }
        }
    }

    fn item(&self, handle: &PlaybackHandle) -> Result<&Item, PlaybackError> {
        self.items
            .get(&handle.id())
            .ok_or(PlaybackError::InvalidHandle)
    }

    fn item_mut(&mut self, handle: &PlaybackHandle) -> Result<&mut Item, PlaybackError> {
        self.items
            .get_mut(&handle.id())
            .ok_or(PlaybackError::InvalidHandle)
    }

    fn issue_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Fires every tick due for `observer` during `step`.
fn deliver(observer: &mut Observer, step: &Step) {
    let mut until_next = observer.interval_secs - observer.accumulated_secs;
    let mut last_fired = None;

    while until_next <= step.played_secs {
        let position_secs = step.start_secs + until_next;
        (observer.callback)(Tick {
            position_secs,
            duration_secs: step.reported_duration,
        });
        last_fired = Some(position_secs);
        until_next += observer.interval_secs;
    }
    observer.accumulated_secs = step.played_secs - (until_next - observer.interval_secs);

    if step.reached_end {
        let end_secs = step.start_secs + step.played_secs;
        if last_fired.is_none_or(|fired| fired < end_secs) {
            (observer.callback)(Tick {
                position_secs: end_secs,
                duration_secs: step.reported_duration,
            });
        }
        observer.accumulated_secs = 0.0;
    }
}

impl PlaybackController for ClockedController {
    fn load(&mut self, resource: &MediaResource) -> Result<PlaybackHandle, PlaybackError> {
        let media = self.probe.probe(&self.assets_dir, resource)?;
        let id = self.issue_id();
        info!(
            resource = %resource,
            duration_secs = media.duration_secs,
            handle = id,
            "Media loaded"
        );
        self.items.insert(
            id,
            Item {
                duration_secs: media.duration_secs,
                position_secs: 0.0,
                playing: false,
                since_load: Duration::ZERO,
            },
        );
        Ok(PlaybackHandle::new(id))
    }

    fn play(&mut self, handle: &PlaybackHandle) -> Result<(), PlaybackError> {
        let item = self.item_mut(handle)?;
        if item.position_secs >= item.duration_secs {
            debug!(handle = handle.id(), "Play ignored at end of media");
            return Ok(());
        }
        item.playing = true;
        Ok(())
    }

    fn pause(&mut self, handle: &PlaybackHandle) -> Result<(), PlaybackError> {
        self.item_mut(handle)?.playing = false;
        Ok(())
    }

    fn is_playing(&self, handle: &PlaybackHandle) -> Result<bool, PlaybackError> {
        Ok(self.item(handle)?.playing)
    }

    fn seek(&mut self, handle: &PlaybackHandle, target_secs: f64) -> Result<f64, PlaybackError> {
        let item = self.item_mut(handle)?;
        let target = if target_secs.is_nan() { 0.0 } else { target_secs };
        let applied = target.clamp(0.0, item.duration_secs);
        if (applied - target).abs() > f64::EPSILON {
            debug!(
                requested = target_secs,
                applied, "Seek target clamped into media range"
            );
        }
        item.position_secs = applied;
        let id = handle.id();
        for observer in self.observers.values_mut().filter(|o| o.handle_id == id) {
            observer.accumulated_secs = 0.0;
        }
        Ok(applied)
    }

    fn position(&self, handle: &PlaybackHandle) -> Result<f64, PlaybackError> {
        Ok(self.item(handle)?.position_secs)
    }

    fn duration(&self, handle: &PlaybackHandle) -> Result<f64, PlaybackError> {
        let item = self.item(handle)?;
        if item.since_load < self.metadata_latency {
            return Err(PlaybackError::DurationUnavailable);
        }
        Ok(item.duration_secs)
    }

    fn subscribe(
        &mut self,
        handle: &PlaybackHandle,
        interval: TickInterval,
        callback: TickCallback,
    ) -> Result<SubscriptionToken, PlaybackError> {
        self.item(handle)?;
        let id = self.issue_id();
        self.observers.insert(
            id,
            Observer {
                handle_id: handle.id(),
                interval_secs: interval.as_duration().as_secs_f64(),
                accumulated_secs: 0.0,
                callback,
            },
        );
        Ok(SubscriptionToken::new(id))
    }

    fn unsubscribe(&mut self, token: SubscriptionToken) {
        self.observers.remove(&token.id());
    }

    fn release(&mut self, handle: PlaybackHandle) {
        let id = handle.id();
        self.observers.retain(|_, o| o.handle_id != id);
        if self.items.remove(&id).is_some() {
            info!(handle = id, "Media released");
        }
    }
}
