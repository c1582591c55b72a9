// SPDX-License-Identifier: MPL-2.0
//! Drag-to-seek sub-component.
//!
//! Tracks the lifecycle of one seek gesture: `Idle` until a drag starts,
//! `Dragging` while deltas are applied to the captured baseline, then
//! `Settling` after release until the orchestrator reports the settle delay
//! elapsed. The session counts as seeking in both `Dragging` and `Settling`.

use crate::domain::video::ProgressRatio;

/// Seek gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum State {
    #[default]
    Idle,
    /// Gesture in progress; deltas are added to `baseline`.
    Dragging { baseline: ProgressRatio },
    /// Gesture committed; waiting out the platform's seek latency.
    Settling,
}

/// Messages for the seek sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Gesture began at the currently displayed progress.
    Start { current: ProgressRatio },
    /// Cumulative horizontal translation since gesture start.
    Update {
        delta_x: f64,
        track_width: f64,
        current: ProgressRatio,
    },
    /// Gesture released at the currently displayed progress.
    End { progress: ProgressRatio },
    /// Settle delay elapsed.
    Settled,
}

/// Effects produced by seek gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Display this progress; not yet committed.
    Preview(ProgressRatio),
    /// Gesture released; seek to this progress once.
    Commit(ProgressRatio),
}

impl State {
    /// Handle a seek message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start { current } => {
                *self = State::Dragging { baseline: current };
                Effect::None
            }
            Message::Update {
                delta_x,
                track_width,
                current,
            } => {
                if track_width.is_nan() || track_width <= 0.0 || !delta_x.is_finite() {
                    return Effect::None;
                }
                let baseline = match *self {
                    State::Dragging { baseline } => baseline,
                    _ => {
                        *self = State::Dragging { baseline: current };
                        current
                    }
                };
                Effect::Preview(baseline.offset(delta_x / track_width))
            }
            Message::End { progress } => match *self {
                State::Dragging { .. } => {
                    *self = State::Settling;
                    Effect::Commit(progress)
                }
                _ => Effect::None,
            },
            Message::Settled => {
                if *self == State::Settling {
                    *self = State::Idle;
                }
                Effect::None
            }
        }
    }

    /// True while ticks must not drive the displayed progress.
    #[must_use]
    pub fn is_seeking(&self) -> bool {
        !matches!(self, State::Idle)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, State::Dragging { .. })
    }

    /// Baseline of the active gesture, if dragging.
    #[must_use]
    pub fn baseline(&self) -> Option<ProgressRatio> {
        match self {
            State::Dragging { baseline } => Some(*baseline),
            _ => None,
        }
    }
}
