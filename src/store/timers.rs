// SPDX-License-Identifier: MPL-2.0
//! Expiry deadlines with explicit cancellation tokens.
//!
//! The table never runs anything by itself: the event loop asks for the
//! tokens whose deadline has passed. Cancelling removes the deadline on the
//! spot, so a cancelled token can never be reported as due.

use std::time::{Duration, Instant};

/// Handle returned when a deadline is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

#[derive(Debug, Default)]
pub struct Timers {
    next_token: u64,
    /// Pending deadlines in scheduling order.
    pending: Vec<(TimerToken, Instant)>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a deadline `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending.push((token, now + delay));
        token
    }

    /// Cancels a deadline. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        match self.pending.iter().position(|(t, _)| *t == token) {
            Some(pos) => {
                self.pending.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Cancels everything, returning how many deadlines were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Removes and returns every token due at `now`, earliest deadline first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerToken> {
        let mut due: Vec<(TimerToken, Instant)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.1 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(token, deadline)| (*deadline, *token));
        due.into_iter().map(|(token, _)| token).collect()
    }

    #[must_use]
    pub fn deadline(&self, token: TimerToken) -> Option<Instant> {
        self.pending
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, deadline)| *deadline)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(_, deadline)| *deadline).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
