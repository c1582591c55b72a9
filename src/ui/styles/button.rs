// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round transport button drawn over the video (play/pause, forward, backward).
///
/// Disabled buttons keep their shape and fade to [`opacity::DISABLED`].
pub fn transport() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (alpha, text_alpha) = match status {
            button::Status::Hovered => (opacity::OVERLAY_HOVER, opacity::OPAQUE),
            button::Status::Pressed => (opacity::OVERLAY_STRONG, opacity::OPAQUE),
            button::Status::Disabled => (opacity::OVERLAY_DIM, opacity::DISABLED),
            button::Status::Active => (opacity::OVERLAY_DIM, opacity::OPAQUE),
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: Color {
                a: text_alpha,
                ..WHITE
            },
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::LG,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_button_darkens_on_hover() {
        let style_fn = transport();
        let active = style_fn(&Theme::Dark, button::Status::Active);
        let hovered = style_fn(&Theme::Dark, button::Status::Hovered);

        match (active.background, hovered.background) {
            (Some(Background::Color(a)), Some(Background::Color(h))) => assert!(h.a > a.a),
            _ => panic!("Expected background colors"),
        }
    }

    #[test]
    fn disabled_transport_button_fades_label() {
        let style = transport()(&Theme::Dark, button::Status::Disabled);
        assert!(style.text_color.a < opacity::OPAQUE);
    }
}
