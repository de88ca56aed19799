// SPDX-License-Identifier: MPL-2.0
//! Ordered list of active toasts and their expiry timers.
//!
//! The `ToastStore` is the single owner of the toast list. Entries keep the
//! position they were first inserted at; resubmitting an id rewrites the
//! entry in place and restarts its timer. Expiry is matched by timer token,
//! so a timer that was cancelled by a resubmission can never remove the
//! updated entry.
//!
//! Time is always passed in explicitly. The iced layer feeds it from a
//! `time::every` subscription, tests feed it virtual instants.

pub mod inbox;
pub mod timers;

pub use inbox::{channel, Inbox, ToastSender};
pub use timers::{TimerToken, Timers};

use crate::toast::{IdGenerator, Toast};
use std::time::Instant;

/// A toast accepted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedToast {
    toast: Toast,
    /// Live only while the toast has a positive duration and has not fired.
    pending_timer: Option<TimerToken>,
}

impl TrackedToast {
    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// The store always assigns an id before tracking a toast.
    #[must_use]
    pub fn id(&self) -> &str {
        self.toast.id().unwrap_or_default()
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending_timer
    }
}

/// Structural change to the list, reported to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A new entry was appended at `index`.
    Added { id: String, index: usize },
    /// The entry at `index` got new message, duration and kind.
    Updated { id: String, index: usize },
    /// The entry that was at `index` expired. `toast` is its last state, so
    /// an exit animation can still draw it.
    Removed { toast: Toast, index: usize },
}

#[derive(Debug)]
pub struct ToastStore {
    entries: Vec<TrackedToast>,
    timers: Timers,
    ids: IdGenerator,
    inbox: Option<Inbox>,
    torn_down: bool,
}

impl ToastStore {
    /// Creates a store subscribed to `inbox`.
    #[must_use]
    pub fn new(inbox: Inbox) -> Self {
        Self {
            entries: Vec::new(),
            timers: Timers::new(),
            ids: IdGenerator::new(),
            inbox: Some(inbox),
            torn_down: false,
        }
    }

    /// Creates a store together with a sender feeding it.
    #[must_use]
    pub fn channel() -> (Self, ToastSender) {
        let (sender, inbox) = channel();
        (Self::new(inbox), sender)
    }

    /// Replaces the id generator, e.g. with a seeded one.
    #[must_use]
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Adds a toast, or updates the entry that already has its id.
    ///
    /// Toasts without an id get a generated one. Any pending timer of an
    /// updated entry is cancelled before a new one is scheduled, and no new
    /// timer is scheduled when the duration is zero or negative. After
    /// [`teardown`](Self::teardown) toasts are still recorded but never
    /// scheduled to expire.
    pub fn submit(&mut self, mut toast: Toast, now: Instant) -> Change {
        let id = match toast.id() {
            Some(id) => id.to_owned(),
            None => {
                let id = self.ids.generate();
                toast.id = Some(id.clone());
                id
            }
        };
        let lifetime = toast.lifetime().filter(|_| !self.torn_down);

        if let Some(index) = self.position(&id) {
            let entry = &mut self.entries[index];
            if let Some(token) = entry.pending_timer.take() {
                self.timers.cancel(token);
            }

            entry.toast.message = toast.message;
            entry.toast.duration = toast.duration;
            entry.toast.kind = toast.kind;
            entry.pending_timer = lifetime.map(|delay| self.timers.schedule(now, delay));

            log::debug!("toast {id} updated (duration {} ms)", toast.duration);
            Change::Updated { id, index }
        } else {
            let pending_timer = lifetime.map(|delay| self.timers.schedule(now, delay));
            log::debug!("toast {id} added (duration {} ms)", toast.duration);

            self.entries.push(TrackedToast {
                toast,
                pending_timer,
            });
            Change::Added {
                id,
                index: self.entries.len() - 1,
            }
        }
    }

    /// Removes the entry owning `token`, if any.
    ///
    /// Tokens that were cancelled or already fired match nothing.
    pub fn expire(&mut self, token: TimerToken) -> Option<Change> {
        self.timers.cancel(token);
        let index = self
            .entries
            .iter()
            .position(|entry| entry.pending_timer == Some(token))?;
        let entry = self.entries.remove(index);

        log::debug!("toast {} expired", entry.id());
        Some(Change::Removed {
            toast: entry.toast,
            index,
        })
    }

    /// Delivers queued toasts, then expires every timer due at `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<Change> {
        if self.torn_down {
            return Vec::new();
        }
        let delivered = self.inbox.as_mut().map(Inbox::drain).unwrap_or_default();
        let mut changes: Vec<Change> = delivered
            .into_iter()
            .map(|toast| self.submit(toast, now))
            .collect();

        for token in self.timers.take_due(now) {
            changes.extend(self.expire(token));
        }
        changes
    }

    /// Cancels every pending timer and unsubscribes from the inbox.
    ///
    /// Safe to call more than once. Entries stay readable but nothing
    /// removes them anymore.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        for entry in &mut self.entries {
            entry.pending_timer = None;
        }
        let cancelled = self.timers.cancel_all();

        if let Some(inbox) = self.inbox.take() {
            inbox.close();
            log::debug!("toast store torn down, {cancelled} timer(s) cancelled");
        }
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.inbox.is_some()
    }

    /// Entries in insertion order.
    pub fn toasts(&self) -> impl DoubleEndedIterator<Item = &TrackedToast> {
        self.entries.iter()
    }

    /// Entries in display order; `reverse` reads the list back to front.
    #[must_use]
    pub fn ordered(&self, reverse: bool) -> Vec<&TrackedToast> {
        if reverse {
            self.entries.iter().rev().collect()
        } else {
            self.entries.iter().collect()
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TrackedToast> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Earliest instant at which a toast will expire.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }
}

impl Drop for ToastStore {
    fn drop(&mut self) {
        self.teardown();
    }
}
