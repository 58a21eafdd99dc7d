// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Flat "×" button used to close toasts, tooltips and dialogs.
///
/// `text_color` follows the surface the button sits on.
pub fn close(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let hover_alpha = match status {
            button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
            button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
            button::Status::Active | button::Status::Disabled => None,
        };

        button::Style {
            background: hover_alpha.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for the demo's anchor and trigger buttons.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        button::Status::Disabled => (palette::GRAY_400, palette::GRAY_700),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
