// SPDX-License-Identifier: MPL-2.0
//! Style functions for toast cards and the demo controls.

pub mod button;
pub mod container;
