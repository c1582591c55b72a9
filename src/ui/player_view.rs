// SPDX-License-Identifier: MPL-2.0
//! Player view that renders a [`ScreenSnapshot`]: the video surface, the
//! dimming overlay with transport controls and the seek track.
//!
//! The view is a pure function of the snapshot. Pointer input on the track is
//! reported in track-local coordinates; the app turns it into drag events.

use crate::app::{Message, TrackInput};
use crate::screen::snapshot::track;
use crate::screen::{Event, PlayIcon, ScreenSnapshot};
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, mouse_area, responsive, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Padding, Point, Size,
};

/// Video block height relative to its width.
const VIDEO_ASPECT: f32 = 9.0 / 16.0;

/// Width of the track for a video block `video_width` wide.
///
/// The track is inset by half a hit area on each side so the handle never
/// leaves the block at either end of the media.
#[must_use]
pub fn track_width_for(video_width: f32) -> f32 {
    (video_width - track::HANDLE_HIT_SIZE).max(0.0)
}

pub fn view<'a>(snapshot: ScreenSnapshot, label: String) -> Element<'a, Message> {
    responsive(move |available: Size| view_inner(&snapshot, &label, available)).into()
}

fn view_inner<'a>(snapshot: &ScreenSnapshot, label: &str, available: Size) -> Element<'a, Message> {
    let video_width = available.width;
    let video_height = (available.width * VIDEO_ASPECT).min(available.height);
    let track_width = track_width_for(video_width);

    let surface = mouse_area(
        Container::new(Text::new(label.to_string()).size(sizing::ICON_MD))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::video_surface),
    )
    .on_press(Message::Screen(Event::TapVideo));

    let mut stack = Stack::new()
        .width(Length::Fixed(video_width))
        .height(Length::Fixed(video_height))
        .push(surface);

    if snapshot.overlay_visible {
        let dimmed = Container::new(transport_row(snapshot))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::dim);
        stack = stack.push(mouse_area(dimmed).on_press(Message::Screen(Event::TapVideo)));
    }

    if let Some(error) = &snapshot.error {
        let card = Container::new(Text::new(error.clone()))
            .padding(spacing::LG)
            .max_width(400.0)
            .style(styles::container::error_card);
        stack = stack.push(
            Container::new(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    stack = stack.push(
        Container::new(seek_strip(snapshot, track_width))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Bottom),
    );

    let block = mouse_area(stack).on_move(move |point: Point| {
        Message::Track(TrackInput::Moved {
            x: point.x - track::HANDLE_HIT_SIZE / 2.0,
            track_width,
        })
    });

    Container::new(Column::new().push(block))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::bar(palette::BLACK))
        .into()
}

fn transport_row<'a>(snapshot: &ScreenSnapshot) -> Element<'a, Message> {
    let play_glyph = match snapshot.play_icon {
        PlayIcon::Play => "\u{25B6}",
        PlayIcon::Pause => "\u{23F8}",
    };

    let backward = transport_button(
        "\u{23EE}",
        sizing::TRANSPORT_SECONDARY,
        snapshot.backward_enabled,
        Event::TapBackward,
    );
    let play = transport_button(
        play_glyph,
        sizing::TRANSPORT_PRIMARY,
        snapshot.controls_enabled,
        Event::TapPlay,
    );
    let forward = transport_button(
        "\u{23ED}",
        sizing::TRANSPORT_SECONDARY,
        snapshot.forward_enabled,
        Event::TapForward,
    );

    Row::new()
        .spacing(spacing::XXL)
        .align_y(Vertical::Center)
        .push(backward)
        .push(play)
        .push(forward)
        .into()
}

fn transport_button<'a>(
    glyph: &'static str,
    diameter: f32,
    enabled: bool,
    event: Event,
) -> Element<'a, Message> {
    let label = Container::new(Text::new(glyph).size(sizing::ICON_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    button(label)
        .on_press_maybe(enabled.then_some(Message::Screen(event)))
        .style(styles::button::transport())
        .width(Length::Fixed(diameter))
        .height(Length::Fixed(diameter))
        .into()
}

/// Bottom strip: the thin track with its fill, plus the handle hit area.
fn seek_strip<'a>(snapshot: &ScreenSnapshot, track_width: f32) -> Element<'a, Message> {
    let inset = track::HANDLE_HIT_SIZE / 2.0;

    let fill = Container::new(Space::new())
        .width(Length::Fixed(snapshot.fill_width(track_width)))
        .height(Length::Fixed(track::HEIGHT))
        .style(styles::container::bar(palette::ACCENT_500));
    let bar = Container::new(fill)
        .width(Length::Fixed(track_width))
        .height(Length::Fixed(track::HEIGHT))
        .style(styles::container::bar(palette::GRAY_400));
    let bar_row = Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 0.0,
            right: inset,
            bottom: 0.0,
            left: inset,
        })
        .align_y(Vertical::Center);

    let mut strip = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(track::HANDLE_HIT_SIZE))
        .push(bar_row);

    if snapshot.handle_visible {
        let handle = Container::new(Space::new())
            .width(Length::Fixed(track::HANDLE_SIZE))
            .height(Length::Fixed(track::HANDLE_SIZE))
            .style(styles::container::handle);
        let hit_area = Container::new(handle)
            .width(Length::Fixed(track::HANDLE_HIT_SIZE))
            .height(Length::Fixed(track::HANDLE_HIT_SIZE))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);
        let left = (snapshot.handle_offset(track_width) + inset).max(0.0);
        strip = strip.push(Container::new(hit_area).padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left,
        }));
    }

    mouse_area(strip)
        .on_press(Message::Track(TrackInput::Pressed))
        .into()
}
