// SPDX-License-Identifier: MPL-2.0
//! Application root: hosts one [`PlayerScreen`] inside an Iced window.
//!
//! The `App` translates widget input into screen events, drives the playback
//! clock on frame ticks and keeps the deadlines of the timer effects the screen
//! requests. All screen logic lives in [`crate::screen`]; this module only
//! wires it to the runtime.

mod message;
mod subscription;
pub mod timers;

pub use message::{Flags, Message, TrackInput};

use crate::application::port::MediaResource;
use crate::config;
use crate::infrastructure::ClockedController;
use crate::screen::{self, Effect, PlayerScreen};
use crate::ui::player_view;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use timers::Timers;
use tracing::{debug, info, warn};

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: u32 = 480;
/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: u32 = 320;

/// Time the playback clock takes to report a duration after load.
const METADATA_LATENCY: Duration = Duration::from_millis(300);

/// Duration of the bundled asset when no media backend is compiled in.
#[cfg(not(feature = "ffmpeg"))]
const BUNDLED_DURATION_SECS: f64 = 60.0;

/// Pointer state of the progress track.
#[derive(Debug, Clone, Copy, Default)]
struct TrackPointer {
    /// Last cursor position, track-local.
    cursor_x: f32,
    track_width: f32,
    /// Cursor position at drag start while a drag is active.
    drag_origin: Option<f32>,
}

/// Root Iced application state.
pub struct App {
    screen: PlayerScreen<ClockedController>,
    resource_label: String,
    timers: Timers,
    pointer: TrackPointer,
    last_frame: Option<Instant>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("resource", &self.resource_label)
            .field("timers", &self.timers)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

#[cfg(feature = "ffmpeg")]
fn media_probe() -> Box<dyn crate::application::port::MediaProbe> {
    Box::new(crate::infrastructure::FfmpegProbe::new())
}

#[cfg(not(feature = "ffmpeg"))]
fn media_probe() -> Box<dyn crate::application::port::MediaProbe> {
    Box::new(
        crate::infrastructure::StaticProbe::new()
            .with_entry(config::DEFAULT_RESOURCE, BUNDLED_DURATION_SECS),
    )
}

/// Parses the requested resource. An unparsable name is kept as is so the
/// load fails and the screen shows the error.
fn parse_resource(raw: &str) -> MediaResource {
    raw.parse().unwrap_or_else(|err| {
        warn!(resource = raw, error = %err, "Invalid media resource name");
        MediaResource::new(raw, "")
    })
}

impl App {
    /// Loads the configuration and mounts the screen on the requested resource.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        if let Some(warning) = config_warning {
            warn!("{warning}");
        }

        let assets_dir: PathBuf = flags.assets_dir.unwrap_or_else(|| config.assets_dir());
        let resource = parse_resource(&flags.resource);
        info!(resource = %flags.resource, assets = %assets_dir.display(), "Starting player");

        let controller =
            ClockedController::new(media_probe(), assets_dir).with_metadata_latency(METADATA_LATENCY);
        let screen = PlayerScreen::mount(controller, &resource, config.screen_settings());

        (Self::with_screen(screen, flags.resource), Task::none())
    }

    fn with_screen(screen: PlayerScreen<ClockedController>, resource_label: String) -> Self {
        Self {
            screen,
            resource_label,
            timers: Timers::default(),
            pointer: TrackPointer::default(),
            last_frame: None,
        }
    }

    fn title(&self) -> String {
        format!("{} - Iced Reel", self.resource_label)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(self.needs_frames()),
        ])
    }

    /// Returns true while the clock, metadata or a timer needs frame ticks.
    fn needs_frames(&self) -> bool {
        let controller = self.screen.controller();
        controller.has_playing_item() || controller.has_pending_metadata() || !self.timers.is_empty()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Screen(event) => self.dispatch(event),
            Message::Track(input) => self.handle_track(input),
            Message::TogglePlayback => {
                let event = if self.screen.status().is_playing() {
                    screen::Event::Pause
                } else {
                    screen::Event::Play
                };
                self.dispatch(event);
            }
            Message::Frame(now) => self.handle_frame(now),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        player_view::view(self.screen.snapshot(), self.resource_label.clone())
    }

    fn dispatch(&mut self, event: screen::Event) {
        let effects = self.screen.handle(event);
        self.apply_effects(effects, Instant::now());
    }

    fn apply_effects(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            self.timers.apply(effect, now);
        }
    }

    fn handle_track(&mut self, input: TrackInput) {
        match input {
            TrackInput::Moved { x, track_width } => {
                self.pointer.cursor_x = x;
                self.pointer.track_width = track_width;
                if let Some(origin) = self.pointer.drag_origin {
                    self.dispatch(screen::Event::DragUpdate {
                        delta_x: f64::from(x - origin),
                        track_width: f64::from(track_width),
                    });
                }
            }
            TrackInput::Pressed => {
                let snapshot = self.screen.snapshot();
                let on_handle = snapshot.handle_visible
                    && snapshot.hits_handle(self.pointer.cursor_x, self.pointer.track_width);
                if on_handle {
                    self.pointer.drag_origin = Some(self.pointer.cursor_x);
                    self.dispatch(screen::Event::DragStart);
                } else {
                    self.dispatch(screen::Event::TapVideo);
                }
            }
            TrackInput::Released => {
                if self.pointer.drag_origin.take().is_some() {
                    self.dispatch(screen::Event::DragEnd);
                }
            }
        }
    }

    fn handle_frame(&mut self, now: Instant) {
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.screen.controller_mut().advance(elapsed);

        let effects = self.screen.drain_ticks();
        self.apply_effects(effects, now);

        for (kind, token) in self.timers.take_expired(now) {
            debug!(?kind, token = token.value(), "Timer expired");
            let effects = self.screen.handle(screen::Event::TimerFired { kind, token });
            self.apply_effects(effects, now);
        }

        self.last_frame = self.needs_frames().then_some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::StaticProbe;
    use crate::screen::{ScreenSettings, TimerKind};
    use crate::test_utils::assert_abs_diff_eq;

    const TRACK_WIDTH: f32 = 350.0;

    fn app_with(latency: Duration) -> App {
        let probe = StaticProbe::new().with_entry("English.mp4", 100.0);
        let controller =
            ClockedController::new(Box::new(probe), "assets").with_metadata_latency(latency);
        let screen = PlayerScreen::mount(
            controller,
            &MediaResource::new("English", "mp4"),
            ScreenSettings::default(),
        );
        App::with_screen(screen, "English.mp4".to_string())
    }

    fn app() -> App {
        app_with(Duration::ZERO)
    }

    fn move_to(app: &mut App, x: f32) {
        let _ = app.update(Message::Track(TrackInput::Moved {
            x,
            track_width: TRACK_WIDTH,
        }));
    }

    #[test]
    fn title_shows_resource() {
        assert_eq!(app().title(), "English.mp4 - Iced Reel");
    }

    #[test]
    fn unparsable_resource_keeps_raw_name() {
        let resource = parse_resource("noextension");
        assert_eq!(resource.name(), "noextension");
        assert_eq!(resource.kind(), "");
    }

    #[test]
    fn pressing_off_handle_taps_video() {
        let mut app = app();
        move_to(&mut app, 10.0);
        let _ = app.update(Message::Track(TrackInput::Pressed));

        assert!(app.screen.overlay_visible());
        assert!(!app.screen.is_dragging());
        // Auto-hide is only armed while playing.
        assert!(app.timers.is_empty());
    }

    #[test]
    fn drag_on_handle_moves_progress_and_commits() {
        let mut app = app();
        // Reveal the overlay so the handle is drawn.
        app.dispatch(screen::Event::TapVideo);

        // Default start progress 0.3 puts the handle at 105 px.
        move_to(&mut app, 105.0);
        let _ = app.update(Message::Track(TrackInput::Pressed));
        assert!(app.screen.is_dragging());

        move_to(&mut app, 140.0);
        assert_abs_diff_eq!(app.screen.progress().value(), 0.4, epsilon = 1e-6);

        let _ = app.update(Message::Track(TrackInput::Released));
        assert!(!app.screen.is_dragging());
        assert!(app.screen.is_seeking());
        assert!(app.screen.pending_timer(TimerKind::SeekSettle).is_some());
    }

    #[test]
    fn release_without_drag_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Track(TrackInput::Released));
        assert!(!app.screen.is_seeking());
        assert!(app.timers.is_empty());
    }

    #[test]
    fn toggle_playback_alternates_play_and_pause() {
        let mut app = app();
        let _ = app.update(Message::TogglePlayback);
        assert!(app.screen.status().is_playing());
        let _ = app.update(Message::TogglePlayback);
        assert!(app.screen.status().is_paused());
    }

    #[test]
    fn frames_expire_auto_hide() {
        let mut app = app();
        let start = Instant::now();
        let effects = app.screen.handle(screen::Event::Play);
        app.apply_effects(effects, start);
        let _ = app.screen.handle(screen::Event::TapVideo);
        assert!(app.screen.overlay_visible());
        assert_eq!(app.timers.len(), 1);

        let _ = app.update(Message::Frame(start + Duration::from_secs(1)));
        assert!(app.screen.overlay_visible());

        let _ = app.update(Message::Frame(start + Duration::from_secs(4)));
        assert!(!app.screen.overlay_visible());
        assert!(app.timers.is_empty());
        assert!(app.screen.status().is_playing());
    }

    #[test]
    fn frames_advance_playback_clock() {
        let mut app = app();
        let _ = app.update(Message::TogglePlayback);

        let start = Instant::now();
        let _ = app.update(Message::Frame(start));
        let _ = app.update(Message::Frame(start + Duration::from_secs(10)));

        // 10 s of 100 s played from the start of the media.
        assert_abs_diff_eq!(app.screen.progress().value(), 0.1, epsilon = 1e-6);
    }

    #[test]
    fn pending_metadata_keeps_frames_running() {
        let app = app_with(Duration::from_millis(300));
        assert!(app.needs_frames());
        assert!(!self::app().needs_frames());
    }
}
