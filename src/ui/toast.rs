// SPDX-License-Identifier: MPL-2.0
//! Toast layer rendering.
//!
//! A visible toast is a single card centered horizontally, near the bottom
//! edge by default or near the top edge when requested.

use super::design_tokens::{sizing, spacing, typography};
use super::styles;
use crate::overlay::{ToastRequest, VisibilityState};
use iced::widget::{text, Container, Text};
use iced::{alignment, Element, Length, Padding, Theme};

/// Outer padding that pins the toast card to its edge.
#[must_use]
pub fn edge_padding(request: &ToastRequest, top_offset: f32) -> Padding {
    if request.at_top {
        Padding::ZERO.top(top_offset)
    } else {
        Padding::ZERO.bottom(spacing::MD)
    }
}

/// Renders the toast layer, or `None` when no toast is visible.
pub fn view<'a, Message: 'a>(
    state: &VisibilityState<ToastRequest>,
    top_offset: f32,
) -> Option<Element<'a, Message>> {
    let request = state.payload.as_ref().filter(|_| state.visible)?;

    let message = Text::new(request.message.clone())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let card = Container::new(message)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast_card);

    let vertical = if request.at_top {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };

    Some(
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(vertical)
            .padding(edge_padding(request, top_offset))
            .into(),
    )
}
