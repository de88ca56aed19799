// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Sizes, colors and motion values used by the toast cards.

## Organization

- **Palette**: Base and severity colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Card dimensions
- **Typography**: Font sizes
- **Border** / **Radius** / **Shadow**: Card chrome
- **Motion**: Enter/exit transition values

## Examples

```
use iced_toasted::ui::design_tokens::{motion, palette, opacity};
use iced::Color;

let faded = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::INFO_500
};
assert!(motion::ENTER_SCALE < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Severity colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Card background
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Upper bound for a card's height; collapsing cards interpolate from it.
    pub const TOAST_MAX_HEIGHT: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Message text
    pub const BODY: f32 = 14.0;
    /// Severity label
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Severity accent around toast cards
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Enter and exit transition length in milliseconds.
    pub const TRANSITION_MS: u64 = 500;

    /// Scale a card starts from when entering and shrinks to when leaving.
    pub const ENTER_SCALE: f32 = 0.9;

    /// Vertical drift of a leaving card, in pixels.
    pub const EXIT_OFFSET_Y: f32 = -16.0;

    /// Control points of the transition curve, `cubic-bezier(.8, 0, .2, 1.5)`.
    pub const EASING: (f32, f32, f32, f32) = (0.8, 0.0, 0.2, 1.5);

    /// Tick interval while something is animating (~60 fps).
    pub const FRAME_MS: u64 = 16;

    /// Tick interval while only expiry timers or the inbox need polling.
    pub const POLL_MS: u64 = 100;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(motion::ENTER_SCALE > 0.0 && motion::ENTER_SCALE < 1.0);
    assert!(motion::FRAME_MS < motion::POLL_MS);
};
