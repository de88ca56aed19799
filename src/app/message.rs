// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::Edge;
use crate::toast::ToastKind;
use crate::ui::toaster;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Toaster(toaster::Message),
    /// Emit a timed toast of the given kind.
    Emit(ToastKind),
    /// Emit a toast that never expires on its own.
    EmitPermanent,
    /// Resubmit the fixed-id progress toast, updating it in place.
    Progress,
    /// Deliver a toast from a background thread through the sender.
    EmitFromBackground,
    SetAlign(Edge),
    SetJustify(Edge),
    ToggleReverse,
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed from `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Horizontal placement override (`--align start|end`).
    pub align: Option<Edge>,
    /// Vertical placement override (`--justify start|end`).
    pub justify: Option<Edge>,
    /// Newest toast first (`--reverse`).
    pub reverse: bool,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTED_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
