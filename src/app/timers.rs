// SPDX-License-Identifier: MPL-2.0
//! Deadline bookkeeping for the screen's timer effects.
//!
//! One deadline per [`TimerKind`]. A `Schedule` replaces the current deadline
//! of its kind, a `Cancel` drops it. Deadlines are polled on every frame.

use crate::screen::{Effect, TimerKind, TimerToken};
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct Timers {
    pending: HashMap<TimerKind, (TimerToken, Instant)>,
}

impl Timers {
    /// Applies one effect returned by the screen.
    pub fn apply(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::Schedule { kind, token, delay } => {
                self.pending.insert(kind, (token, now + delay));
            }
            Effect::Cancel { kind } => {
                self.pending.remove(&kind);
            }
        }
    }

    /// Removes and returns every deadline reached at `now`, earliest first.
    pub fn take_expired(&mut self, now: Instant) -> Vec<(TimerKind, TimerToken)> {
        let mut expired: Vec<_> = self
            .pending
            .iter()
            .filter(|(_, (_, deadline))| *deadline <= now)
            .map(|(kind, (token, deadline))| (*deadline, *kind, *token))
            .collect();
        expired.sort_by_key(|(deadline, _, _)| *deadline);

        for (_, kind, _) in &expired {
            self.pending.remove(kind);
        }
        expired
            .into_iter()
            .map(|(_, kind, token)| (kind, token))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
