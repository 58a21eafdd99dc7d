// SPDX-License-Identifier: MPL-2.0
//! Container styles for toast cards, dialog panels and backdrops.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Toast card: theme surface with an accent border.
pub fn toast_card(theme: &Theme) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: palette::INFO_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Dialog panel with a variant-specific accent border.
pub fn dialog_panel(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;

        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::SURFACE,
                ..base
            })),
            border: Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::LG,
            text_color: Some(theme.palette().text),
            ..Default::default()
        }
    }
}

/// Full-window tint at the given opacity.
///
/// Used as the dialog scrim and as the backdrop of blocking overlays.
pub fn tint(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_card_has_accent_border() {
        let style = toast_card(&Theme::Dark);
        assert_eq!(style.border.color, palette::INFO_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn tint_keeps_requested_alpha() {
        let style = tint(opacity::SCRIM)(&Theme::Light);
        let Some(Background::Color(color)) = style.background else {
            panic!("expected color background")
        };
        assert!((color.a - opacity::SCRIM).abs() < f32::EPSILON);
    }
}
