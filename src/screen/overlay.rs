// SPDX-License-Identifier: MPL-2.0
//! Overlay visibility sub-component for the transport controls.

/// Overlay visibility state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    visible: bool,
}

/// Messages for the overlay sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// User tapped the video surface.
    Toggle,
    /// Auto-hide timer expired. Ignored while a seek is active.
    AutoHideElapsed { seeking: bool },
}

/// Effects produced by overlay visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    VisibilityChanged(bool),
}

impl State {
    /// Handle an overlay message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle => {
                self.visible = !self.visible;
                Effect::VisibilityChanged(self.visible)
            }
            Message::AutoHideElapsed { seeking } => {
                if self.visible && !seeking {
                    self.visible = false;
                    Effect::VisibilityChanged(false)
                } else {
                    Effect::None
                }
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
