// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{Message, TrackInput};
use iced::{event, keyboard, mouse, time, Subscription};
use std::time::Duration;

/// Interval of the frame tick that drives the playback clock.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Routes global input the widgets do not see.
///
/// A left-button release ends a drag wherever the cursor is, even outside the
/// track. The space bar toggles playback when no widget captured it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) = event {
            return Some(Message::Track(TrackInput::Released));
        }
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Space),
                ..
            }) => Some(Message::TogglePlayback),
            _ => None,
        }
    })
}

/// Frame ticks, only while something time-dependent is going on.
pub fn create_frame_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(FRAME_INTERVAL).map(Message::Frame)
    } else {
        Subscription::none()
    }
}
