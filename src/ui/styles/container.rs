// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Toast card surface with a severity-colored border.
///
/// Derived from the theme background so cards stay readable in light and
/// dark modes. `alpha` is the card's current opacity while animating.
pub fn toast_card(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(faded(base, opacity::SURFACE * alpha))),
        border: Border {
            color: faded(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: faded(shadow::MD.color, opacity::OVERLAY_SUBTLE * alpha),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}
