// SPDX-License-Identifier: MPL-2.0
//! Tooltip body and arrow styles.
//!
//! Tooltips contrast with the theme: light bodies on dark themes, dark bodies
//! on light themes.

use crate::ui::design_tokens::radius;
use iced::widget::{container, text};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

fn is_dark(theme: &Theme) -> bool {
    let bg = theme.extended_palette().background.base.color;
    (bg.r + bg.g + bg.b) / 3.0 < 0.5
}

fn body_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.95, 0.95, 0.95, 0.98)
    } else {
        Color::from_rgba(0.15, 0.15, 0.15, 0.98)
    }
}

fn text_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.1, 0.1, 0.1)
    } else {
        Color::from_rgb(0.95, 0.95, 0.95)
    }
}

/// Tooltip body.
pub fn body(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(body_color(theme))),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.3),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(text_color(theme)),
        ..Default::default()
    }
}

/// Arrow glyph, drawn in the body color so it reads as part of the body.
pub fn arrow(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(body_color(theme)),
    }
}

/// Text color to use for widgets placed on the tooltip body.
#[must_use]
pub fn on_body(theme: &Theme) -> Color {
    text_color(theme)
}
