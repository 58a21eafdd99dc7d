// SPDX-License-Identifier: MPL-2.0
//! Tooltip layer rendering.
//!
//! The layer translates a [`Placement`] into insets from the viewport edges
//! and draws an arrow row plus the body. Bottom-anchored tooltips draw the
//! body first so the arrow stays next to the anchor.

use super::design_tokens::{sizing, spacing, typography};
use super::styles;
use crate::overlay::{HorizontalSide, Placement, TooltipView, VerticalSide};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Padding, Size, Theme};

/// Absolute insets of a placed tooltip, measured from the viewport edges on
/// the placement's sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub horizontal: HorizontalSide,
    pub vertical: VerticalSide,
    /// Distance from the chosen horizontal edge to the body.
    pub body_inset: f32,
    /// Distance from the chosen horizontal edge to the arrow glyph.
    pub arrow_inset: f32,
    /// Distance from the chosen vertical edge to the container.
    pub vertical_inset: f32,
    /// Widest the body may grow without crossing the far margin.
    pub max_body_width: f32,
}

/// Resolves a placement against the viewport.
///
/// Negative insets are clamped to the viewport edge.
#[must_use]
pub fn resolve_frame(placement: &Placement, viewport: Size, max_body_width: f32) -> Frame {
    let outer = placement.outer_offset.horizontal;
    let body_inset = (outer + placement.body_margins.near).max(0.0);
    let arrow_inset = (outer + placement.arrow_offset).max(0.0);

    let available = viewport.width - body_inset - placement.body_margins.far.unwrap_or(0.0);

    Frame {
        horizontal: placement.horizontal,
        vertical: placement.vertical,
        body_inset,
        arrow_inset,
        vertical_inset: placement.outer_offset.vertical.max(0.0),
        max_body_width: available.clamp(0.0, max_body_width),
    }
}

/// Estimates the rendered size of a tooltip body before layout.
///
/// The estimate stands in for the measured body box when the host has no
/// layout feedback for the overlay layer.
#[must_use]
pub fn estimate_body_size(message: &str, max_body_width: f32) -> Size {
    let glyph = typography::BODY_SM * typography::GLYPH_ADVANCE_RATIO;
    let line_height = typography::BODY_SM * typography::LINE_HEIGHT_RATIO;
    let chrome = spacing::XS * 2.0;

    let text_width = message.chars().count() as f32 * glyph;
    let inner_max = (max_body_width - chrome).max(glyph);
    let lines = (text_width / inner_max).ceil().max(1.0);

    Size::new(
        text_width.min(inner_max) + chrome,
        lines * line_height + chrome + sizing::TOOLTIP_ARROW_ROW,
    )
}

fn inset_row<'a, Message: 'a>(
    element: Element<'a, Message>,
    inset: f32,
    side: HorizontalSide,
) -> Row<'a, Message> {
    let spacer = Space::new().width(Length::Fixed(inset));
    match side {
        HorizontalSide::Left => Row::new().push(spacer).push(element),
        HorizontalSide::Right => Row::new().push(element).push(spacer),
    }
}

/// Renders the tooltip layer, or `None` while hidden or not yet placed.
pub fn view<'a, Message: Clone + 'a>(
    tooltip: &TooltipView,
    viewport: Size,
    max_body_width: f32,
    on_close: Message,
) -> Option<Element<'a, Message>> {
    let request = tooltip.request.as_ref().filter(|_| tooltip.visible)?;
    let placement = tooltip.placement.as_ref()?;
    let frame = resolve_frame(placement, viewport, max_body_width);

    let mut body_content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(request.message.clone()).size(typography::BODY_SM));
    if request.closeable {
        body_content = body_content.push(
            button(Text::new("×").size(typography::BODY_SM))
                .on_press(on_close)
                .padding([0.0, spacing::XXS])
                .style(|theme: &Theme, status| {
                    styles::button::close(styles::tooltip::on_body(theme))(theme, status)
                }),
        );
    }

    let body = Container::new(body_content)
        .max_width(frame.max_body_width)
        .padding(spacing::XS)
        .style(styles::tooltip::body);

    let glyph = match frame.vertical {
        VerticalSide::Top => "▲",
        VerticalSide::Bottom => "▼",
    };
    let arrow = Text::new(glyph)
        .size(sizing::TOOLTIP_ARROW_ROW)
        .style(styles::tooltip::arrow);

    let arrow_row = inset_row(arrow.into(), frame.arrow_inset, frame.horizontal);
    let body_row = inset_row(body.into(), frame.body_inset, frame.horizontal);

    let column = if placement.reverse_stacking() {
        Column::new().push(body_row).push(arrow_row)
    } else {
        Column::new().push(arrow_row).push(body_row)
    };

    let (align_y, padding) = match frame.vertical {
        VerticalSide::Top => (
            alignment::Vertical::Top,
            Padding::ZERO.top(frame.vertical_inset),
        ),
        VerticalSide::Bottom => (
            alignment::Vertical::Bottom,
            Padding::ZERO.bottom(frame.vertical_inset),
        ),
    };
    let align_x = match frame.horizontal {
        HorizontalSide::Left => alignment::Horizontal::Left,
        HorizontalSide::Right => alignment::Horizontal::Right,
    };

    Some(
        Container::new(column.align_x(align_x))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(padding)
            .into(),
    )
}
