// SPDX-License-Identifier: MPL-2.0
//! Player screen interaction state machine.
//!
//! [`PlayerScreen`] couples three sources of change that compete for the
//! displayed progress:
//!
//! - periodic position ticks from the [`PlaybackController`],
//! - drag gestures on the seek handle,
//! - deferred actions (overlay auto-hide and the post-seek settle window).
//!
//! While a seek session is active (dragging or settling) the displayed
//! progress is driven exclusively by gesture deltas; ticks do not move it,
//! though an end-of-media tick still finishes playback. A seek command is
//! issued at most once per gesture, on release.
//!
//! The screen is framework-free: [`PlayerScreen::handle`] consumes an
//! [`Event`] and returns timer [`Effect`]s for the host event loop, and
//! [`PlayerScreen::snapshot`] describes what to render. Everything runs on
//! the caller's thread. Controller callbacks only enqueue ticks, which
//! [`PlayerScreen::drain_ticks`] applies in order.

pub mod deferred;
pub mod overlay;
pub mod seek;
pub mod snapshot;

pub use deferred::{DeferredSlot, Effect, TimerKind, TimerToken};
pub use snapshot::{PlayIcon, ScreenSnapshot};

use crate::application::port::{
    MediaResource, PlaybackController, PlaybackHandle, SubscriptionToken, Tick,
};
use crate::domain::error::PlaybackError;
use crate::domain::video::{
    AutoHideDelay, PlaybackStatus, ProgressRatio, SeekSettleDelay, TickInterval,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Displayed progress before the first tick arrives.
pub const DEFAULT_START_PROGRESS: f64 = 0.3;

/// Tunables of the screen, usually derived from the user configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSettings {
    pub start_progress: ProgressRatio,
    pub tick_interval: TickInterval,
    pub auto_hide: AutoHideDelay,
    pub settle: SeekSettleDelay,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            start_progress: ProgressRatio::new(DEFAULT_START_PROGRESS),
            tick_interval: TickInterval::default(),
            auto_hide: AutoHideDelay::default(),
            settle: SeekSettleDelay::default(),
        }
    }
}

/// Whether the screen can drive playback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Ready,
    /// A load or command failed. Controls stay disabled, no retry.
    Unavailable(PlaybackError),
}

/// Inputs of the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Tap on the video surface.
    TapVideo,
    /// Tap on the central play/pause button.
    TapPlay,
    /// Direct play command, independent of overlay visibility.
    Play,
    /// Direct pause command, independent of overlay visibility.
    Pause,
    TapForward,
    TapBackward,
    /// Position report from the controller.
    Tick(Tick),
    DragStart,
    /// Cumulative translation since drag start, with the track width used to
    /// normalise it.
    DragUpdate { delta_x: f64, track_width: f64 },
    DragEnd,
    /// A timer requested through [`Effect::Schedule`] expired.
    TimerFired { kind: TimerKind, token: TimerToken },
}

/// The single-video player screen.
pub struct PlayerScreen<C: PlaybackController> {
    controller: C,
    handle: Option<PlaybackHandle>,
    subscription: Option<SubscriptionToken>,
    ticks: mpsc::UnboundedReceiver<Tick>,
    settings: ScreenSettings,
    overlay: overlay::State,
    seek: seek::State,
    status: PlaybackStatus,
    progress: ProgressRatio,
    availability: Availability,
    auto_hide: DeferredSlot,
    settle: DeferredSlot,
    mounted: bool,
}

impl<C: PlaybackController> std::fmt::Debug for PlayerScreen<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerScreen")
            .field("overlay", &self.overlay)
            .field("seek", &self.seek)
            .field("status", &self.status)
            .field("progress", &self.progress)
            .field("availability", &self.availability)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl<C: PlaybackController> PlayerScreen<C> {
    /// Loads `resource` and subscribes to its position ticks.
    ///
    /// A load or subscribe failure does not fail construction: the screen
    /// comes up with disabled controls and the error in its snapshot.
    pub fn mount(mut controller: C, resource: &MediaResource, settings: ScreenSettings) -> Self {
        let (sender, ticks) = mpsc::unbounded_channel();
        let mut handle = None;
        let mut subscription = None;
        let mut availability = Availability::Ready;

        match controller.load(resource) {
            Ok(loaded) => {
                let callback = Box::new(move |tick: Tick| {
                    // The receiver only goes away with the screen itself.
                    let _ = sender.send(tick);
                });
                match controller.subscribe(&loaded, settings.tick_interval, callback) {
                    Ok(token) => subscription = Some(token),
                    Err(err) => {
                        warn!(resource = %resource, error = %err, "Tick subscription failed");
                        availability = Availability::Unavailable(err);
                    }
                }
                handle = Some(loaded);
            }
            Err(err) => {
                warn!(resource = %resource, error = %err, "Media could not be loaded");
                availability = Availability::Unavailable(err);
            }
        }

        Self {
            controller,
            handle,
            subscription,
            ticks,
            settings,
            overlay: overlay::State::default(),
            seek: seek::State::default(),
            status: PlaybackStatus::default(),
            progress: settings.start_progress,
            availability,
            auto_hide: DeferredSlot::new(TimerKind::AutoHide),
            settle: DeferredSlot::new(TimerKind::SeekSettle),
            mounted: true,
        }
    }

    /// Applies one event and returns the timer effects it produced.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        if !self.mounted {
            debug!(?event, "Event ignored after unmount");
            return Vec::new();
        }

        match event {
            Event::TapVideo => {
                self.overlay.handle(overlay::Message::Toggle);
                Vec::new()
            }
            Event::TapPlay => {
                if !self.overlay.is_visible() {
                    debug!("Play tap ignored while overlay is hidden");
                    return Vec::new();
                }
                if !self.controls_enabled() {
                    debug!("Play tap ignored while controls are disabled");
                    return Vec::new();
                }
                match self.status {
                    PlaybackStatus::Paused => self.start_playback(),
                    PlaybackStatus::Playing => self.pause_playback(),
                    PlaybackStatus::Finished => self.restart_playback(),
                }
            }
            Event::Play => match self.status {
                _ if !self.controls_enabled() => Vec::new(),
                PlaybackStatus::Paused => self.start_playback(),
                PlaybackStatus::Finished => self.restart_playback(),
                PlaybackStatus::Playing => Vec::new(),
            },
            Event::Pause => {
                if self.controls_enabled() && self.status.is_playing() {
                    self.pause_playback()
                } else {
                    Vec::new()
                }
            }
            Event::TapForward => {
                debug!("Forward is not available");
                Vec::new()
            }
            Event::TapBackward => {
                debug!("Backward is not available");
                Vec::new()
            }
            Event::Tick(tick) => self.apply_tick(tick),
            Event::DragStart => {
                if !self.controls_enabled() {
                    return Vec::new();
                }
                self.begin_drag()
            }
            Event::DragUpdate {
                delta_x,
                track_width,
            } => self.update_drag(delta_x, track_width),
            Event::DragEnd => self.end_drag(),
            Event::TimerFired { kind, token } => {
                self.timer_fired(kind, token);
                Vec::new()
            }
        }
    }

    /// Applies every tick queued by the controller since the last call.
    pub fn drain_ticks(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        while let Ok(tick) = self.ticks.try_recv() {
            effects.extend(self.handle(Event::Tick(tick)));
        }
        effects
    }

    /// Cancels both timers, unsubscribes and releases the handle.
    ///
    /// Idempotent. Every later event is ignored.
    pub fn unmount(&mut self) -> Vec<Effect> {
        if !self.mounted {
            return Vec::new();
        }
        self.mounted = false;

        let effects: Vec<Effect> = [self.auto_hide.cancel(), self.settle.cancel()]
            .into_iter()
            .flatten()
            .collect();
        if let Some(token) = self.subscription.take() {
            self.controller.unsubscribe(token);
        }
        if let Some(handle) = self.handle.take() {
            self.controller.release(handle);
        }
        self.ticks.close();
        info!("Player screen unmounted");
        effects
    }

    /// Current render description.
    #[must_use]
    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            overlay_visible: self.overlay.is_visible(),
            play_icon: if self.status.is_playing() {
                PlayIcon::Pause
            } else {
                PlayIcon::Play
            },
            progress: self.progress,
            handle_visible: self.overlay.is_visible() || self.seek.is_dragging(),
            controls_enabled: self.controls_enabled(),
            forward_enabled: false,
            backward_enabled: false,
            finished: self.status.is_finished(),
            error: match &self.availability {
                Availability::Ready => None,
                Availability::Unavailable(err) => Some(err.to_string()),
            },
        }
    }

    #[must_use]
    pub fn progress(&self) -> ProgressRatio {
        self.progress
    }

    /// Progress that drag deltas are added to.
    #[must_use]
    pub fn baseline(&self) -> ProgressRatio {
        self.seek.baseline().unwrap_or(self.progress)
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    #[must_use]
    pub fn is_seeking(&self) -> bool {
        self.seek.is_seeking()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.seek.is_dragging()
    }

    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    #[must_use]
    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.mounted && self.handle.is_some() && self.availability == Availability::Ready
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn settings(&self) -> &ScreenSettings {
        &self.settings
    }

    /// Token of the pending timer of `kind`, if one is armed.
    #[must_use]
    pub fn pending_timer(&self, kind: TimerKind) -> Option<TimerToken> {
        self.slot(kind).pending()
    }

    /// Number of pending timers of `kind`, either 0 or 1.
    #[must_use]
    pub fn pending_timer_count(&self, kind: TimerKind) -> usize {
        self.slot(kind).pending_count()
    }

    #[must_use]
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Mutable access for hosts that drive the controller's clock.
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    fn start_playback(&mut self) -> Vec<Effect> {
        if let Err(err) = self.command(|c, h| c.play(h)) {
            return self.fail(err);
        }
        info!("Playback started");
        self.status = PlaybackStatus::Playing;
        vec![self.auto_hide.arm(self.settings.auto_hide.as_duration())]
    }

    fn pause_playback(&mut self) -> Vec<Effect> {
        if let Err(err) = self.command(|c, h| c.pause(h)) {
            return self.fail(err);
        }
        info!("Playback paused");
        self.status = PlaybackStatus::Paused;
        self.auto_hide.cancel().into_iter().collect()
    }

    /// User-initiated restart from end-of-media.
    fn restart_playback(&mut self) -> Vec<Effect> {
        let restarted = self
            .command(|c, h| c.seek(h, 0.0))
            .and_then(|_| self.command(|c, h| c.play(h)));
        if let Err(err) = restarted {
            return self.fail(err);
        }
        info!("Playback restarted from the beginning");
        self.progress = ProgressRatio::START;
        self.status = PlaybackStatus::Playing;
        vec![self.auto_hide.arm(self.settings.auto_hide.as_duration())]
    }

    fn apply_tick(&mut self, tick: Tick) -> Vec<Effect> {
        if self.status.is_finished() {
            return Vec::new();
        }
        let ratio = match tick.progress() {
            Ok(ratio) => ratio,
            Err(err) => {
                debug!(error = %err, "Tick without usable duration ignored");
                return Vec::new();
            }
        };

        // A seek session owns the displayed progress, but end of media still
        // finishes playback: the controller sends no further ticks.
        if !self.seek.is_seeking() {
            self.progress = ratio;
        }
        if !ratio.is_complete() {
            return Vec::new();
        }

        info!(position_secs = tick.position_secs, "Playback finished");
        self.status = PlaybackStatus::Finished;
        self.auto_hide.cancel().into_iter().collect()
    }

    fn begin_drag(&mut self) -> Vec<Effect> {
        let effects = [self.auto_hide.cancel(), self.settle.cancel()]
            .into_iter()
            .flatten()
            .collect();
        self.seek.handle(seek::Message::Start {
            current: self.progress,
        });
        effects
    }

    fn update_drag(&mut self, delta_x: f64, track_width: f64) -> Vec<Effect> {
        if !self.controls_enabled() {
            return Vec::new();
        }
        if track_width.is_nan() || track_width <= 0.0 {
            debug!(track_width, "Drag update ignored for degenerate track");
            return Vec::new();
        }

        let effects = if self.seek.is_dragging() {
            Vec::new()
        } else {
            self.begin_drag()
        };
        if let seek::Effect::Preview(progress) = self.seek.handle(seek::Message::Update {
            delta_x,
            track_width,
            current: self.progress,
        }) {
            self.progress = progress;
        }
        effects
    }

    fn end_drag(&mut self) -> Vec<Effect> {
        let seek::Effect::Commit(committed) = self.seek.handle(seek::Message::End {
            progress: self.progress,
        }) else {
            return Vec::new();
        };
        self.progress = committed;

        let mut effects = Vec::new();
        if let Err(err) = self.commit_seek(committed) {
            effects.extend(self.fail(err));
        }

        if self.status.is_playing() && self.controls_enabled() {
            effects.push(self.auto_hide.arm(self.settings.auto_hide.as_duration()));
        }
        effects.push(self.settle.arm(self.settings.settle.as_duration()));
        effects
    }

    /// Issues the single seek of a completed gesture.
    fn commit_seek(&mut self, committed: ProgressRatio) -> Result<(), PlaybackError> {
        let duration = match self.command(|c, h| c.duration(h)) {
            Ok(duration) => duration,
            Err(PlaybackError::DurationUnavailable) => {
                debug!("Seek skipped, duration is not known yet");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let target = committed.to_position(duration);
        let applied = self.command(|c, h| c.seek(h, target))?;
        info!(
            target_secs = target,
            applied_secs = applied,
            "Seek committed"
        );

        if self.status.is_finished() && applied < duration {
            self.status = PlaybackStatus::Paused;
        }
        Ok(())
    }

    fn timer_fired(&mut self, kind: TimerKind, token: TimerToken) {
        if !self.slot_mut(kind).fire(token) {
            debug!(?kind, token = token.value(), "Stale timer ignored");
            return;
        }
        match kind {
            TimerKind::AutoHide => {
                self.overlay.handle(overlay::Message::AutoHideElapsed {
                    seeking: self.seek.is_seeking(),
                });
            }
            TimerKind::SeekSettle => {
                self.seek.handle(seek::Message::Settled);
            }
        }
    }

    /// Moves the screen to the disabled state if `err` warrants it.
    fn fail(&mut self, err: PlaybackError) -> Vec<Effect> {
        if !err.disables_controls() {
            debug!(error = %err, "Playback error absorbed");
            return Vec::new();
        }
        warn!(error = %err, "Playback failed, controls disabled");
        self.availability = Availability::Unavailable(err);
        self.auto_hide.cancel().into_iter().collect()
    }

    fn command<T>(
        &mut self,
        op: impl FnOnce(&mut C, &PlaybackHandle) -> Result<T, PlaybackError>,
    ) -> Result<T, PlaybackError> {
        let handle = self.handle.as_ref().ok_or(PlaybackError::InvalidHandle)?;
        op(&mut self.controller, handle)
    }

    fn slot(&self, kind: TimerKind) -> &DeferredSlot {
        match kind {
            TimerKind::AutoHide => &self.auto_hide,
            TimerKind::SeekSettle => &self.settle,
        }
    }

    fn slot_mut(&mut self, kind: TimerKind) -> &mut DeferredSlot {
        match kind {
            TimerKind::AutoHide => &mut self.auto_hide,
            TimerKind::SeekSettle => &mut self.settle,
        }
    }
}

impl<C: PlaybackController> Drop for PlayerScreen<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, Command, RecordingController, F64_EPSILON};
    use std::time::Duration;

    fn english() -> MediaResource {
        MediaResource::new("English", "mp4")
    }

    fn mount(duration_secs: f64) -> PlayerScreen<RecordingController> {
        PlayerScreen::mount(
            RecordingController::new(duration_secs),
            &english(),
            ScreenSettings::default(),
        )
    }

    fn visible(duration_secs: f64) -> PlayerScreen<RecordingController> {
        let mut screen = mount(duration_secs);
        screen.handle(Event::TapVideo);
        screen
    }

    fn tick(screen: &mut PlayerScreen<RecordingController>, position: f64, duration: f64) {
        screen.controller_mut().emit(position, Some(duration));
        screen.drain_ticks();
    }

    fn fire(screen: &mut PlayerScreen<RecordingController>, kind: TimerKind) -> Vec<Effect> {
        let token = screen.pending_timer(kind).expect("timer should be pending");
        screen.handle(Event::TimerFired { kind, token })
    }

    // -------------------------------------------------------------------------
    // Mount
    // -------------------------------------------------------------------------

    #[test]
    fn initial_state_matches_configuration() {
        let screen = mount(100.0);

        assert!(!screen.overlay_visible());
        assert!(!screen.is_seeking());
        assert_eq!(screen.status(), PlaybackStatus::Paused);
        assert_abs_diff_eq!(screen.progress().value(), 0.3);
        assert!(screen.controller().has_subscription());
        assert!(screen.controls_enabled());
    }

    #[test]
    fn load_failure_disables_controls() {
        let mut controller = RecordingController::new(100.0);
        controller.fail_load = true;
        let mut screen = PlayerScreen::mount(controller, &english(), ScreenSettings::default());
        screen.handle(Event::TapVideo);

        let effects = screen.handle(Event::TapPlay);

        assert!(effects.is_empty());
        assert!(screen.controller().commands.is_empty());
        let snapshot = screen.snapshot();
        assert!(!snapshot.controls_enabled);
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Media resource not found: English.mp4")
        );
    }

    #[test]
    fn subscribe_failure_disables_controls_and_still_releases() {
        let mut controller = RecordingController::new(100.0);
        controller.fail_subscribe = true;
        let mut screen = PlayerScreen::mount(controller, &english(), ScreenSettings::default());
        screen.handle(Event::TapVideo);

        let effects = screen.handle(Event::TapPlay);

        assert!(effects.is_empty());
        assert!(!screen.controls_enabled());
        assert!(matches!(
            screen.availability(),
            Availability::Unavailable(PlaybackError::InvalidHandle)
        ));
        assert!(screen.controller().commands.is_empty());

        screen.unmount();
        screen.unmount();
        assert_eq!(screen.controller().count(&Command::Release), 1);
        assert_eq!(screen.controller().count(&Command::Unsubscribe), 0);
    }

    // -------------------------------------------------------------------------
    // Overlay and play/pause
    // -------------------------------------------------------------------------

    #[test]
    fn tap_video_toggles_overlay_only() {
        let mut screen = mount(100.0);

        assert!(screen.handle(Event::TapVideo).is_empty());
        assert!(screen.overlay_visible());
        screen.handle(Event::TapVideo);
        assert!(!screen.overlay_visible());

        assert!(screen.controller().commands.is_empty());
        assert_abs_diff_eq!(screen.progress().value(), 0.3);
    }

    #[test]
    fn tap_play_with_hidden_overlay_issues_no_command() {
        let mut screen = mount(100.0);
        let effects = screen.handle(Event::TapPlay);

        assert!(effects.is_empty());
        assert!(screen.controller().commands.is_empty());
        assert_eq!(screen.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn tap_play_starts_playback_and_arms_auto_hide() {
        let mut screen = visible(100.0);
        let effects = screen.handle(Event::TapPlay);

        assert_eq!(screen.controller().commands, vec![Command::Play]);
        assert_eq!(screen.status(), PlaybackStatus::Playing);
        assert_eq!(screen.snapshot().play_icon, PlayIcon::Pause);
        assert!(matches!(
            effects.as_slice(),
            [Effect::Schedule {
                kind: TimerKind::AutoHide,
                delay,
                ..
            }] if *delay == Duration::from_secs(3)
        ));
    }

    #[test]
    fn tap_play_while_playing_pauses_and_cancels_auto_hide() {
        let mut screen = visible(100.0);
        screen.handle(Event::TapPlay);

        let effects = screen.handle(Event::TapPlay);

        assert_eq!(
            screen.controller().commands,
            vec![Command::Play, Command::Pause]
        );
        assert_eq!(screen.status(), PlaybackStatus::Paused);
        assert_eq!(
            effects,
            vec![Effect::Cancel {
                kind: TimerKind::AutoHide
            }]
        );
        assert_eq!(screen.pending_timer_count(TimerKind::AutoHide), 0);
    }

    #[test]
    fn pause_while_paused_is_noop() {
        let mut screen = mount(100.0);
        let before = screen.snapshot();

        let effects = screen.handle(Event::Pause);

        assert!(effects.is_empty());
        assert!(screen.controller().commands.is_empty());
        assert_eq!(screen.snapshot(), before);
    }

    #[test]
    fn forward_and_backward_are_stubs() {
        let mut screen = visible(100.0);
        let before = screen.snapshot();

        screen.handle(Event::TapForward);
        screen.handle(Event::TapBackward);

        assert_eq!(screen.snapshot(), before);
        assert!(!before.forward_enabled);
        assert!(!before.backward_enabled);
    }

    #[test]
    fn repeated_play_keeps_single_auto_hide_timer() {
        let mut screen = visible(100.0);
        screen.handle(Event::TapPlay);
        let first = screen.pending_timer(TimerKind::AutoHide);
        screen.handle(Event::TapPlay);
        screen.handle(Event::TapPlay);

        assert_eq!(screen.pending_timer_count(TimerKind::AutoHide), 1);
        assert_ne!(screen.pending_timer(TimerKind::AutoHide), first);
    }

    #[test]
    fn command_failure_disables_controls() {
        let mut screen = visible(100.0);
        screen.controller_mut().fail_commands = true;

        screen.handle(Event::TapPlay);

        assert_eq!(
            screen.availability(),
            &Availability::Unavailable(PlaybackError::InvalidHandle)
        );
        assert_eq!(screen.status(), PlaybackStatus::Paused);
        assert!(!screen.snapshot().controls_enabled);
    }

    // -------------------------------------------------------------------------
    // Auto-hide
    // -------------------------------------------------------------------------

    #[test]
    fn auto_hide_hides_overlay() {
        let mut screen = visible(100.0);
        screen.handle(Event::TapPlay);

        fire(&mut screen, TimerKind::AutoHide);

        assert!(!screen.overlay_visible());
    }

    #[test]
    fn stale_auto_hide_token_is_ignored() {
        let mut screen = visible(100.0);
        screen.handle(Event::TapPlay);
        let stale = screen.pending_timer(TimerKind::AutoHide).unwrap();
        screen.handle(Event::TapPlay);
        screen.handle(Event::TapPlay);

        screen.handle(Event::TimerFired {
            kind: TimerKind::AutoHide,
            token: stale,
        });

        assert!(screen.overlay_visible());
        assert_eq!(screen.pending_timer_count(TimerKind::AutoHide), 1);
    }

    // -------------------------------------------------------------------------
    // Ticks
    // -------------------------------------------------------------------------

    #[test]
    fn tick_updates_progress_and_baseline() {
        let mut screen = mount(100.0);
        tick(&mut screen, 25.0, 100.0);

        assert_abs_diff_eq!(screen.progress().value(), 0.25);
        assert_abs_diff_eq!(screen.baseline().value(), 0.25);
    }

    #[test]
    fn tick_without_duration_leaves_progress() {
        let mut screen = mount(100.0);
        screen.controller_mut().emit(25.0, None);
        screen.controller_mut().emit(25.0, Some(0.0));
        screen.drain_ticks();

        assert_abs_diff_eq!(screen.progress().value(), 0.3);
    }

    #[test]
    fn ticks_while_dragging_are_ignored() {
        let mut screen = visible(100.0);
        screen.handle(Event::DragStart);
        screen.handle(Event::DragUpdate {
            delta_x: 50.0,
            track_width: 500.0,
        });

        tick(&mut screen, 80.0, 100.0);

        assert_abs_diff_eq!(screen.progress().value(), 0.4, epsilon = F64_EPSILON);
    }

    #[test]
    fn end_of_media_tick_while_dragging_finishes_playback() {
        let mut screen = visible(100.0);
        screen.handle(Event::TapPlay);
        screen.handle(Event::DragStart);
        screen.handle(Event::DragUpdate {
            delta_x: 50.0,
            track_width: 500.0,
        });

        tick(&mut screen, 100.0, 100.0);

        assert_eq!(screen.status(), PlaybackStatus::Finished);
        assert_eq!(screen.snapshot().play_icon, PlayIcon::Play);
        assert_eq!(screen.pending_timer_count(TimerKind::AutoHide), 0);
        // The gesture keeps the displayed progress.
        assert_abs_diff_eq!(screen.progress().value(), 0.4, epsilon = F64_EPSILON);
    }

    #[test]
    fn end_of_media_tick_finishes_playback() {
        let mut screen = visible(100.0);
        screen.handle(Event::TapPlay);

        tick(&mut screen, 100.0, 100.0);

        assert_eq!(screen.status(), PlaybackStatus::Finished);
        assert!(screen.snapshot().finished);
        assert_eq!(screen.snapshot().play_icon, PlayIcon::Play);
        assert_eq!(screen.pending_timer_count(TimerKind::AutoHide), 0);
        assert_eq!(screen.controller().count(&Command::Play), 1);
    }

    #[test]
    fn ticks_after_finish_are_ignored() {
        let mut screen = mount(100.0);
        tick(&mut screen, 100.0, 100.0);
        tick(&mut screen, 40.0, 100.0);

        assert_abs_diff_eq!(screen.progress().value(), 1.0);
        assert_eq!(screen.status(), PlaybackStatus::Finished);
    }

    #[test]
    fn tap_play_after_finish_restarts() {
        let mut screen = visible(100.0);
        tick(&mut screen, 100.0, 100.0);

        let effects = screen.handle(Event::TapPlay);

        assert_eq!(screen.controller().seeks(), vec![0.0]);
        assert_eq!(screen.controller().count(&Command::Play), 1);
        assert_eq!(screen.status(), PlaybackStatus::Playing);
        assert_abs_diff_eq!(screen.progress().value(), 0.0);
        assert_eq!(effects.len(), 1);
    }

    // -------------------------------------------------------------------------
    // Drag to seek
    // -------------------------------------------------------------------------

    #[test]
    fn drag_start_keeps_displayed_progress() {
        let mut screen = visible(100.0);
        tick(&mut screen, 42.0, 100.0);
        let before = screen.progress();

        screen.handle(Event::DragStart);

        assert_eq!(screen.progress(), before);
        assert_eq!(screen.baseline(), before);
        assert!(screen.is_dragging());
        assert!(screen.snapshot().handle_visible);
    }

    #[test]
    fn drag_start_cancels_auto_hide() {
        let mut screen = visible(100.0);
        screen.handle(Event::TapPlay);

        let effects = screen.handle(Event::DragStart);

        assert!(effects.contains(&Effect::Cancel {
            kind: TimerKind::AutoHide
        }));
        assert_eq!(screen.pending_timer_count(TimerKind::AutoHide), 0);
    }

    #[test]
    fn drag_commits_single_seek() {
        let mut screen = visible(100.0);
        screen.handle(Event::DragStart);
        for step in 1..=10 {
            screen.handle(Event::DragUpdate {
                delta_x: f64::from(step) * 4.0,
                track_width: 400.0,
            });
        }
        assert_abs_diff_eq!(screen.progress().value(), 0.4, epsilon = F64_EPSILON);
        assert!(screen.controller().seeks().is_empty());

        let effects = screen.handle(Event::DragEnd);

        let seeks = screen.controller().seeks();
        assert_eq!(seeks.len(), 1);
        assert_abs_diff_eq!(seeks[0], 40.0, epsilon = 1e-9);
        assert!(screen.is_seeking());
        assert!(matches!(
            effects.as_slice(),
            [Effect::Schedule {
                kind: TimerKind::SeekSettle,
                delay,
                ..
            }] if *delay == Duration::from_millis(500)
        ));
    }

    #[test]
    fn drag_end_while_playing_rearms_auto_hide() {
        let mut screen = visible(100.0);
        screen.handle(Event::TapPlay);
        screen.handle(Event::DragStart);

        let effects = screen.handle(Event::DragEnd);

        assert_eq!(screen.pending_timer_count(TimerKind::AutoHide), 1);
        assert_eq!(screen.pending_timer_count(TimerKind::SeekSettle), 1);
        assert_eq!(effects.len(), 2);
    }

    #[test]
    fn overshoot_is_displayed_and_clamped_by_seek() {
        let mut screen = visible(100.0);
        screen.handle(Event::DragStart);
        screen.handle(Event::DragUpdate {
            delta_x: 300.0,
            track_width: 300.0,
        });

        assert_abs_diff_eq!(screen.progress().value(), 1.3, epsilon = F64_EPSILON);
        screen.handle(Event::DragEnd);

        assert_abs_diff_eq!(screen.controller().seeks()[0], 130.0, epsilon = 1e-9);
        assert_abs_diff_eq!(screen.controller().position_secs, 100.0);
    }

    #[test]
    fn second_drag_start_rebaselines() {
        let mut screen = visible(100.0);
        screen.handle(Event::DragStart);
        screen.handle(Event::DragUpdate {
            delta_x: 20.0,
            track_width: 100.0,
        });
        screen.handle(Event::DragStart);

        assert_abs_diff_eq!(screen.baseline().value(), 0.5, epsilon = F64_EPSILON);
        screen.handle(Event::DragUpdate {
            delta_x: 10.0,
            track_width: 100.0,
        });
        assert_abs_diff_eq!(screen.progress().value(), 0.6, epsilon = F64_EPSILON);
    }

    #[test]
    fn drag_end_without_drag_is_ignored() {
        let mut screen = visible(100.0);
        assert!(screen.handle(Event::DragEnd).is_empty());
        assert!(screen.controller().seeks().is_empty());
    }

    #[test]
    fn drag_update_with_zero_width_is_ignored() {
        let mut screen = visible(100.0);
        screen.handle(Event::DragStart);
        screen.handle(Event::DragUpdate {
            delta_x: 20.0,
            track_width: 0.0,
        });
        assert_abs_diff_eq!(screen.progress().value(), 0.3);
    }

    #[test]
    fn settle_window_blocks_ticks_until_elapsed() {
        let mut screen = visible(100.0);
        screen.handle(Event::DragStart);
        screen.handle(Event::DragUpdate {
            delta_x: 30.0,
            track_width: 100.0,
        });
        screen.handle(Event::DragEnd);

        tick(&mut screen, 31.0, 100.0);
        assert_abs_diff_eq!(screen.progress().value(), 0.6, epsilon = F64_EPSILON);

        fire(&mut screen, TimerKind::SeekSettle);
        assert!(!screen.is_seeking());

        tick(&mut screen, 61.0, 100.0);
        assert_abs_diff_eq!(screen.progress().value(), 0.61, epsilon = F64_EPSILON);
    }

    #[test]
    fn drag_start_during_settle_cancels_it() {
        let mut screen = visible(100.0);
        screen.handle(Event::DragStart);
        screen.handle(Event::DragEnd);
        let stale = screen.pending_timer(TimerKind::SeekSettle).unwrap();

        let effects = screen.handle(Event::DragStart);
        assert!(effects.contains(&Effect::Cancel {
            kind: TimerKind::SeekSettle
        }));

        screen.handle(Event::TimerFired {
            kind: TimerKind::SeekSettle,
            token: stale,
        });
        assert!(screen.is_dragging());
    }

    #[test]
    fn auto_hide_does_not_fire_while_seeking() {
        let mut screen = visible(100.0);
        screen.handle(Event::TapPlay);
        screen.handle(Event::DragStart);
        screen.handle(Event::DragEnd);

        fire(&mut screen, TimerKind::AutoHide);

        assert!(screen.overlay_visible());
    }

    #[test]
    fn seek_without_duration_is_skipped() {
        let mut screen = visible(100.0);
        screen.controller_mut().duration_secs = None;
        screen.handle(Event::DragStart);
        screen.handle(Event::DragUpdate {
            delta_x: 10.0,
            track_width: 100.0,
        });

        screen.handle(Event::DragEnd);

        assert!(screen.controller().seeks().is_empty());
        assert!(screen.controls_enabled());
        assert!(screen.is_seeking());
    }

    #[test]
    fn dragging_back_from_finish_pauses() {
        let mut screen = visible(100.0);
        tick(&mut screen, 100.0, 100.0);
        screen.handle(Event::DragStart);
        screen.handle(Event::DragUpdate {
            delta_x: -50.0,
            track_width: 100.0,
        });

        screen.handle(Event::DragEnd);

        assert_eq!(screen.status(), PlaybackStatus::Paused);
        assert_abs_diff_eq!(screen.controller().seeks()[0], 50.0, epsilon = 1e-9);
    }

    // -------------------------------------------------------------------------
    // Unmount
    // -------------------------------------------------------------------------

    #[test]
    fn unmount_cancels_timers_and_releases() {
        let mut screen = visible(100.0);
        screen.handle(Event::TapPlay);
        screen.handle(Event::DragStart);
        screen.handle(Event::DragEnd);

        let effects = screen.unmount();

        assert!(effects.contains(&Effect::Cancel {
            kind: TimerKind::AutoHide
        }));
        assert!(effects.contains(&Effect::Cancel {
            kind: TimerKind::SeekSettle
        }));
        assert_eq!(screen.controller().count(&Command::Unsubscribe), 1);
        assert_eq!(screen.controller().count(&Command::Release), 1);
        assert!(!screen.controller().has_subscription());
    }

    #[test]
    fn events_after_unmount_are_ignored() {
        let mut screen = visible(100.0);
        screen.unmount();
        let before = screen.snapshot();

        screen.handle(Event::TapVideo);
        screen.handle(Event::TapPlay);
        screen.handle(Event::Tick(Tick {
            position_secs: 50.0,
            duration_secs: Some(100.0),
        }));

        assert_eq!(screen.snapshot(), before);
        assert!(screen.unmount().is_empty());
        assert_eq!(screen.controller().count(&Command::Release), 1);
    }
}
