// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the overlay renderers.
//!
//! Colors, spacing, sizes and shadows live here so the toast, tooltip and
//! dialog layers stay visually consistent.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Backdrop drawn under blocking toasts and tooltips.
    pub const BACKDROP: f32 = 0.35;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Scrim behind dialogs.
    pub const SCRIM: f32 = 0.6;
    pub const SURFACE: f32 = 0.98;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;

    pub const DIALOG_WIDTH: f32 = 420.0;
    pub const DIALOG_WIDE_WIDTH: f32 = 640.0;
    pub const DIALOG_COMPACT_WIDTH: f32 = 280.0;

    /// Height reserved for the tooltip arrow glyph row.
    pub const TOOLTIP_ARROW_ROW: f32 = 12.0;

    /// Demo anchor buttons.
    pub const ANCHOR_WIDTH: f32 = 120.0;
    pub const ANCHOR_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Dialog titles.
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - overlay messages.
    pub const BODY: f32 = 14.0;

    /// Tooltip text.
    pub const BODY_SM: f32 = 13.0;

    /// Average glyph advance as a fraction of the font size, used to estimate
    /// text extents before layout.
    pub const GLYPH_ADVANCE_RATIO: f32 = 0.55;

    /// Line height as a multiple of the font size.
    pub const LINE_HEIGHT_RATIO: f32 = 1.3;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
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

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::BACKDROP < opacity::SCRIM);

    assert!(sizing::DIALOG_WIDE_WIDTH > sizing::DIALOG_WIDTH);
    assert!(sizing::DIALOG_WIDTH > sizing::DIALOG_COMPACT_WIDTH);

    assert!(typography::BODY > typography::BODY_SM);
};
