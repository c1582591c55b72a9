// SPDX-License-Identifier: MPL-2.0
//! Single-slot cancellable timers.
//!
//! A [`DeferredSlot`] holds at most one outstanding [`TimerToken`]. Arming
//! replaces (and therefore cancels) the previous token; an expiry whose token
//! no longer matches is stale and rejected by [`DeferredSlot::fire`].
//!
//! The slot never sleeps. It returns [`Effect`]s that the host event loop
//! turns into real timers.

use std::time::Duration;

/// Which deferred action a timer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Hides the control overlay after a quiet period.
    AutoHide,
    /// Ends the post-commit seek window.
    SeekSettle,
}

/// Generation token identifying one arming of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Timer request for the host event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start a timer. Any running timer of the same kind must be dropped.
    Schedule {
        kind: TimerKind,
        token: TimerToken,
        delay: Duration,
    },
    /// Drop the running timer of this kind, if any.
    Cancel { kind: TimerKind },
}

/// At most one pending deferred action of a given kind.
#[derive(Debug, Clone)]
pub struct DeferredSlot {
    kind: TimerKind,
    generation: u64,
    pending: Option<TimerToken>,
}

impl DeferredSlot {
    #[must_use]
    pub fn new(kind: TimerKind) -> Self {
        Self {
            kind,
            generation: 0,
            pending: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    /// Arms the slot, invalidating any previously pending token.
    pub fn arm(&mut self, delay: Duration) -> Effect {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.pending = Some(token);
        Effect::Schedule {
            kind: self.kind,
            token,
            delay,
        }
    }

    /// Cancels the pending token. Returns `None` if nothing was pending.
    pub fn cancel(&mut self) -> Option<Effect> {
        self.pending
            .take()
            .map(|_| Effect::Cancel { kind: self.kind })
    }

    /// Consumes an expiry. Returns true only for the currently pending token.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of outstanding timers, either 0 or 1.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        usize::from(self.pending.is_some())
    }

    #[must_use]
    pub fn pending(&self) -> Option<TimerToken> {
        self.pending
    }
}
