// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration.

use crate::ui::design_tokens::motion;

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Default enter/exit transition length (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = motion::TRANSITION_MS;

/// Longest transition accepted from a settings file (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5_000;

/// Lifetime the demo gives to timed toasts (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: i64 = 3_000;
