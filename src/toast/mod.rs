// SPDX-License-Identifier: MPL-2.0
//! Toast data as submitted by callers.
//!
//! A [`Toast`] is a plain value: message, lifetime and kind, plus an optional
//! identifier. Toasts sharing an identifier are the same notification, so
//! submitting one again updates the card already on screen instead of
//! stacking a duplicate.

pub mod id;

pub use id::IdGenerator;

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Severity of a toast; drives the accent color and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Info,
        ToastKind::Success,
        ToastKind::Warning,
        ToastKind::Error,
    ];

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            ToastKind::Info => palette::INFO_500,
            ToastKind::Success => palette::SUCCESS_500,
            ToastKind::Warning => palette::WARNING_500,
            ToastKind::Error => palette::ERROR_500,
        }
    }

    /// Short label rendered next to the message.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ToastKind::Info => "Info",
            ToastKind::Success => "Success",
            ToastKind::Warning => "Warning",
            ToastKind::Error => "Error",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A toast request.
///
/// `duration` is in milliseconds; zero or negative keeps the toast on screen
/// until it is replaced by a timed submission with the same id or the store
/// is torn down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub message: String,
    #[serde(default)]
    pub duration: i64,
    #[serde(rename = "type", default)]
    pub kind: ToastKind,
}

impl Toast {
    /// Creates a toast without an id; one is generated on submission.
    pub fn new(kind: ToastKind, message: impl Into<String>, duration: i64) -> Self {
        Self {
            id: None,
            message: message.into(),
            duration,
            kind,
        }
    }

    pub fn info(message: impl Into<String>, duration: i64) -> Self {
        Self::new(ToastKind::Info, message, duration)
    }

    pub fn success(message: impl Into<String>, duration: i64) -> Self {
        Self::new(ToastKind::Success, message, duration)
    }

    pub fn warning(message: impl Into<String>, duration: i64) -> Self {
        Self::new(ToastKind::Warning, message, duration)
    }

    pub fn error(message: impl Into<String>, duration: i64) -> Self {
        Self::new(ToastKind::Error, message, duration)
    }

    /// Sets an explicit id so later submissions can update this toast.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns the id, treating an empty string as absent.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Returns how long the toast stays up, or `None` when it is permanent.
    #[must_use]
    pub fn lifetime(&self) -> Option<Duration> {
        u64::try_from(self.duration)
            .ok()
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.lifetime().is_none()
    }
}
