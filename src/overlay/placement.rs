// SPDX-License-Identifier: MPL-2.0
//! Tooltip placement relative to its anchor.
//!
//! [`place`] is a pure function of the anchor box, the tooltip body box, an
//! optional forced vertical side and the viewport size. It picks the screen
//! half the anchor sits in, then derives the margins that keep the body on
//! screen and the offset that centers the arrow on the anchor.

use super::geometry::Geometry;
use crate::config::PlacementConfig;
use iced::Size;

/// Viewport edge the tooltip is aligned to horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalSide {
    Left,
    Right,
}

/// Viewport edge the tooltip container is anchored from.
///
/// `Top` means the container hangs from the top edge and the body sits below
/// the anchor; `Bottom` means it rises from the bottom edge and the body sits
/// above the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    Top,
    Bottom,
}

/// Offset of the outer tooltip container from the chosen viewport edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OuterOffset {
    /// Distance from the chosen horizontal edge.
    pub horizontal: f32,
    /// Distance from the chosen vertical edge.
    pub vertical: f32,
}

/// Body margins, expressed relative to the chosen horizontal side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyMargins {
    /// Margin on the chosen side. May be negative to pull the body back on
    /// screen.
    pub near: f32,
    /// Margin on the opposite side, only set when the body had to be clamped.
    pub far: Option<f32>,
}

/// Result of [`place`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub horizontal: HorizontalSide,
    pub vertical: VerticalSide,
    pub outer_offset: OuterOffset,
    pub body_margins: BodyMargins,
    /// Arrow offset from the chosen horizontal side of the container.
    pub arrow_offset: f32,
}

impl Placement {
    /// Bottom-anchored containers stack body before arrow so the arrow stays
    /// next to the anchor.
    #[must_use]
    pub fn reverse_stacking(&self) -> bool {
        self.vertical == VerticalSide::Bottom
    }
}

/// Computes where the tooltip body and arrow go.
#[must_use]
pub fn place(
    anchor: &Geometry,
    body: &Geometry,
    override_side: Option<VerticalSide>,
    viewport: Size,
    config: &PlacementConfig,
) -> Placement {
    let horizontal = if anchor.center_x() < viewport.width / 2.0 {
        HorizontalSide::Left
    } else {
        HorizontalSide::Right
    };

    let vertical = override_side.unwrap_or(if anchor.center_y() < viewport.height / 2.0 {
        VerticalSide::Top
    } else {
        VerticalSide::Bottom
    });

    let arrow_offset = anchor.width / 2.0 - config.arrow_size;

    let near_distance = match horizontal {
        HorizontalSide::Left => anchor.left,
        HorizontalSide::Right => anchor.right,
    };

    let (clamp, far) = if near_distance + config.max_body_width > viewport.width {
        let close_side = near_distance.min(body.width / 2.0);
        (-close_side + config.side_margin, Some(config.side_margin))
    } else {
        (0.0, None)
    };

    // Center the body opening on the anchor, minus the arrow's fixed inset.
    let near = clamp + anchor.width / 2.0 - config.arrow_inset;

    let edge = match vertical {
        VerticalSide::Top => anchor.top,
        VerticalSide::Bottom => anchor.bottom,
    };

    Placement {
        horizontal,
        vertical,
        outer_offset: OuterOffset {
            horizontal: near_distance,
            vertical: edge + anchor.height + config.anchor_gap,
        },
        body_margins: BodyMargins { near, far },
        arrow_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(left: f32, top: f32, width: f32, height: f32, viewport: Size) -> Geometry {
        Geometry {
            top,
            right: viewport.width - (left + width),
            bottom: viewport.height - (top + height),
            left,
            width,
            height,
        }
    }

    #[test]
    fn anchor_in_right_half_selects_right_side() {
        let viewport = Size::new(800.0, 600.0);
        let anchor = geometry(700.0, 10.0, 100.0, 20.0, viewport);

        let placement = place(&anchor, &Geometry::default(), None, viewport, &PlacementConfig::default());

        assert_eq!(placement.horizontal, HorizontalSide::Right);
    }

    #[test]
    fn roomy_top_left_anchor_only_gets_centering_margin() {
        let viewport = Size::new(800.0, 600.0);
        let anchor = geometry(100.0, 50.0, 200.0, 40.0, viewport);
        let body = geometry(0.0, 0.0, 250.0, 60.0, viewport);

        let placement = place(&anchor, &body, None, viewport, &PlacementConfig::default());

        assert_eq!(placement.horizontal, HorizontalSide::Left);
        assert_eq!(placement.vertical, VerticalSide::Top);
        assert_eq!(placement.arrow_offset, 92.0);
        assert_eq!(placement.body_margins, BodyMargins { near: 85.0, far: None });
        assert_eq!(
            placement.outer_offset,
            OuterOffset {
                horizontal: 100.0,
                vertical: 95.0,
            }
        );
        assert!(!placement.reverse_stacking());
    }

    #[test]
    fn narrow_viewport_clamps_body_back_on_screen() {
        let viewport = Size::new(400.0, 300.0);
        let anchor = geometry(20.0, 200.0, 40.0, 20.0, viewport);
        let body = geometry(0.0, 0.0, 300.0, 50.0, viewport);

        let placement = place(&anchor, &body, None, viewport, &PlacementConfig::default());

        assert_eq!(placement.horizontal, HorizontalSide::Left);
        assert_eq!(placement.vertical, VerticalSide::Bottom);
        assert_eq!(placement.body_margins, BodyMargins { near: -7.0, far: Some(8.0) });
        assert_eq!(placement.arrow_offset, 12.0);
        assert_eq!(placement.outer_offset.horizontal, 20.0);
        assert_eq!(placement.outer_offset.vertical, 105.0);
        assert!(placement.reverse_stacking());
    }

    #[test]
    fn right_side_clamp_mirrors_left_side() {
        let viewport = Size::new(400.0, 300.0);
        let anchor = geometry(340.0, 200.0, 40.0, 20.0, viewport);
        let body = geometry(0.0, 0.0, 300.0, 50.0, viewport);

        let placement = place(&anchor, &body, None, viewport, &PlacementConfig::default());

        assert_eq!(placement.horizontal, HorizontalSide::Right);
        assert_eq!(placement.outer_offset.horizontal, 20.0);
        assert_eq!(placement.body_margins, BodyMargins { near: -7.0, far: Some(8.0) });
    }

    #[test]
    fn override_side_wins_over_anchor_position() {
        let viewport = Size::new(800.0, 600.0);
        let low_anchor = geometry(100.0, 550.0, 40.0, 20.0, viewport);
        let config = PlacementConfig::default();

        let natural = place(&low_anchor, &Geometry::default(), None, viewport, &config);
        let forced = place(
            &low_anchor,
            &Geometry::default(),
            Some(VerticalSide::Top),
            viewport,
            &config,
        );

        assert_eq!(natural.vertical, VerticalSide::Bottom);
        assert_eq!(forced.vertical, VerticalSide::Top);
        assert_eq!(forced.outer_offset.vertical, 550.0 + 20.0 + 5.0);
    }

    #[test]
    fn zero_sized_inputs_do_not_panic() {
        let placement = place(
            &Geometry::default(),
            &Geometry::default(),
            None,
            Size::new(0.0, 0.0),
            &PlacementConfig::default(),
        );

        assert_eq!(placement.horizontal, HorizontalSide::Right);
        assert_eq!(placement.arrow_offset, -8.0);
        assert!(placement.body_margins.near.is_finite());
    }

    #[test]
    fn placement_is_deterministic() {
        let viewport = Size::new(1024.0, 768.0);
        let anchor = geometry(900.0, 700.0, 60.0, 30.0, viewport);
        let body = geometry(0.0, 0.0, 200.0, 80.0, viewport);
        let config = PlacementConfig::default();

        let first = place(&anchor, &body, None, viewport, &config);
        for _ in 0..5 {
            assert_eq!(place(&anchor, &body, None, viewport, &config), first);
        }
    }
}
