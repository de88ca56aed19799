// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_toasted::toast::ToastKind;
    use iced_toasted::ui::design_tokens::{motion, opacity, palette, sizing, spacing};
    use iced_toasted::ui::styles::{button, container};

    #[test]
    fn all_styles_compile() {
        let theme = Theme::Dark;

        for kind in ToastKind::ALL {
            let _ = container::toast_card(&theme, kind.color(), 1.0);
            let _ = button::tinted(kind.color())(&theme, iced::widget::button::Status::Active);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::INFO_500;
        let _ = spacing::MD;
        let _ = opacity::SURFACE;
        let _ = sizing::TOAST_WIDTH;
        let _ = motion::TRANSITION_MS;
    }

    #[test]
    fn cards_read_in_light_and_dark_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = container::toast_card(&theme, palette::WARNING_500, 1.0);
            assert_eq!(style.border.color, palette::WARNING_500);
            assert!(style.text_color.is_some());
        }
    }
}
