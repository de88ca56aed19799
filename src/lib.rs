// SPDX-License-Identifier: MPL-2.0
//! `iced_toasted` shows stacked, auto-expiring toast notifications in Iced
//! applications.
//!
//! The [`store::ToastStore`] keeps the ordered list of active toasts,
//! deduplicated by id, and expires them through cancellable timers. The
//! [`ui::toaster::Toaster`] component renders that list with enter/exit
//! transitions and drives the store from an Iced subscription.
//!
//! ```
//! use iced_toasted::store::ToastStore;
//! use iced_toasted::toast::Toast;
//! use std::time::{Duration, Instant};
//!
//! let (mut store, _sender) = ToastStore::channel();
//! let start = Instant::now();
//! store.submit(Toast::success("Saved", 100).with_id("save"), start);
//! store.submit(Toast::success("Saved again", 100).with_id("save"), start);
//! assert_eq!(store.len(), 1);
//!
//! store.tick(start + Duration::from_millis(100));
//! assert!(store.is_empty());
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toasted/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod store;
pub mod toast;
pub mod ui;
