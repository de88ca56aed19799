// SPDX-License-Identifier: MPL-2.0
//! Inbound toast delivery.
//!
//! Any part of an application (including background tasks) can hold a
//! [`ToastSender`]; the store owns the matching [`Inbox`] and drains it on
//! every tick. Dropping the inbox is the unsubscribe: senders start failing
//! with [`Error::Unsubscribed`].

use crate::error::{Error, Result};
use crate::toast::Toast;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Creates a connected sender/inbox pair.
#[must_use]
pub fn channel() -> (ToastSender, Inbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ToastSender { tx }, Inbox { rx })
}

/// Cloneable handle used to emit toasts.
#[derive(Debug, Clone)]
pub struct ToastSender {
    tx: UnboundedSender<Toast>,
}

impl ToastSender {
    /// Queues a toast for the store. Fails once the store has torn down.
    pub fn send(&self, toast: Toast) -> Result<()> {
        self.tx.send(toast).map_err(|_| Error::Unsubscribed)
    }

    /// Returns whether a store is still listening.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// Receiving side, owned by the store.
#[derive(Debug)]
pub struct Inbox {
    rx: UnboundedReceiver<Toast>,
}

impl Inbox {
    /// Takes every toast delivered so far, in arrival order.
    pub fn drain(&mut self) -> Vec<Toast> {
        let mut toasts = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(toast) => toasts.push(toast),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        toasts
    }

    /// Stops accepting new toasts; already queued ones are discarded.
    pub(crate) fn close(mut self) {
        self.rx.close();
        let discarded = self.drain().len();
        if discarded > 0 {
            log::debug!("discarded {discarded} undelivered toast(s) on unsubscribe");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_arrival_order() {
        let (sender, mut inbox) = channel();
        sender.send(Toast::info("one", 0)).unwrap();
        sender.send(Toast::info("two", 0)).unwrap();

        let messages: Vec<String> = inbox.drain().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["one", "two"]);
        assert!(inbox.drain().is_empty());
    }

    #[test]
    fn send_fails_after_close() {
        let (sender, inbox) = channel();
        assert!(sender.is_subscribed());

        inbox.close();
        assert!(!sender.is_subscribed());
        assert_eq!(sender.send(Toast::info("late", 0)), Err(Error::Unsubscribed));
    }

    #[test]
    fn clones_share_the_inbox() {
        let (sender, mut inbox) = channel();
        let other = sender.clone();
        sender.send(Toast::info("a", 0)).unwrap();
        other.send(Toast::info("b", 0)).unwrap();
        assert_eq!(inbox.drain().len(), 2);
    }
}
