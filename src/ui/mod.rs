// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`toaster`] - The toast stack component (state, messages, view)
//! - [`transition`] - Enter/exit visual states and easing
//! - [`styles`] - Card and button styles
//! - [`design_tokens`] - Design system constants (colors, spacing, motion)

pub mod design_tokens;
pub mod styles;
pub mod toaster;
pub mod transition;
