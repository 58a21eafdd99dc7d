// SPDX-License-Identifier: MPL-2.0
//! Dialog layer rendering.
//!
//! Dialogs cover the window with a scrim and center a panel on it. The whole
//! layer swallows input. Clicking the scrim or the close button closes a
//! cancellable dialog; clicks inside the panel never reach the scrim.

use super::design_tokens::{opacity, palette, sizing, spacing, typography};
use super::styles;
use crate::overlay::{DialogRequest, VisibilityState};
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renderer variant selected by a dialog's class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Standard,
    Wide,
    Compact,
    Warning,
}

impl Variant {
    /// Maps a class name to a variant. Unknown names use the standard one.
    #[must_use]
    pub fn from_class(class_name: Option<&str>) -> Self {
        match class_name.map(str::trim) {
            Some("wide") => Self::Wide,
            Some("compact") => Self::Compact,
            Some("warning") => Self::Warning,
            _ => Self::Standard,
        }
    }

    #[must_use]
    pub fn width(self) -> f32 {
        match self {
            Self::Wide => sizing::DIALOG_WIDE_WIDTH,
            Self::Compact => sizing::DIALOG_COMPACT_WIDTH,
            Self::Standard | Self::Warning => sizing::DIALOG_WIDTH,
        }
    }

    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Self::Warning => palette::WARNING_500,
            Self::Standard | Self::Wide | Self::Compact => palette::GRAY_700,
        }
    }
}

/// Renders the dialog layer, or `None` when no dialog is visible.
///
/// `on_close` is only wired up for cancellable dialogs.
pub fn view<'a, Message: Clone + 'a>(
    state: &VisibilityState<DialogRequest>,
    on_close: Message,
) -> Option<Element<'a, Message>> {
    let request = state.payload.as_ref().filter(|_| state.visible)?;
    let variant = Variant::from_class(request.class_name.as_deref());

    let mut header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Space::new().width(Length::Fill));
    if request.cancellable {
        header = header.push(
            button(Text::new("×").size(typography::TITLE_SM))
                .on_press(on_close.clone())
                .padding([0.0, spacing::XS])
                .style(|theme: &Theme, status| {
                    styles::button::close(theme.palette().text)(theme, status)
                }),
        );
    }

    let panel = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(Text::new(request.content.clone()).size(typography::BODY)),
    )
    .width(Length::Fixed(variant.width()))
    .padding(spacing::LG)
    .style(styles::container::dialog_panel(variant.accent()));

    let scrim = Container::new(center(opaque(panel)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::tint(opacity::SCRIM));

    let mut backdrop = mouse_area(scrim);
    if request.cancellable {
        backdrop = backdrop.on_press(on_close);
    }

    Some(opaque(backdrop))
}
