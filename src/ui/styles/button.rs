// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid button tinted with `color`; lighter while hovered.
pub fn tinted(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Color {
                a: opacity::SURFACE - opacity::OVERLAY_SUBTLE,
                ..color
            },
            button::Status::Disabled => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..color
            },
            button::Status::Active | button::Status::Pressed => color,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
