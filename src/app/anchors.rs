// SPDX-License-Identifier: MPL-2.0
//! Demo anchors: buttons pinned near the window corners that own tooltips.
//!
//! Their boxes are computed here rather than measured, and the same boxes
//! are used to render the buttons and to fill the layout [`Scene`].

use crate::overlay::{ElementId, Scene, TooltipRequest, VerticalSide};
use crate::ui::design_tokens::{sizing, spacing};
use iced::{Point, Rectangle, Size};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A demo anchor and the tooltip it publishes.
#[derive(Debug, Clone)]
pub struct Anchor {
    pub id: ElementId,
    pub label: &'static str,
    pub corner: Corner,
    pub tip: &'static str,
}

impl Anchor {
    /// The tooltip request this anchor publishes when pressed.
    #[must_use]
    pub fn request(&self) -> TooltipRequest {
        let request = TooltipRequest::new(self.tip, self.id.clone()).delay(Duration::from_millis(300));
        match self.corner {
            Corner::TopLeft => request,
            Corner::TopRight => request.closeable(false).duration(Duration::from_secs(3)),
            Corner::BottomLeft => request.blocking(true),
            Corner::BottomRight => request.side(VerticalSide::Bottom),
        }
    }

    /// Box of the anchor button in a window of size `viewport`.
    #[must_use]
    pub fn bounds(&self, viewport: Size) -> Rectangle {
        let margin = spacing::LG;
        let right = (viewport.width - margin - sizing::ANCHOR_WIDTH).max(margin);
        let bottom = (viewport.height - margin - sizing::ANCHOR_HEIGHT).max(margin);

        let (x, y) = match self.corner {
            Corner::TopLeft => (margin, margin),
            Corner::TopRight => (right, margin),
            Corner::BottomLeft => (margin, bottom),
            Corner::BottomRight => (right, bottom),
        };
        Rectangle::new(
            Point::new(x, y),
            Size::new(sizing::ANCHOR_WIDTH, sizing::ANCHOR_HEIGHT),
        )
    }
}

pub static ANCHORS: [Anchor; 4] = [
    Anchor {
        id: ElementId::from_static("anchor-top-left"),
        label: "Open",
        corner: Corner::TopLeft,
        tip: "Opens a file. Press × to close this tip.",
    },
    Anchor {
        id: ElementId::from_static("anchor-top-right"),
        label: "Share",
        corner: Corner::TopRight,
        tip: "Sharing is disabled in the demo. This tip hides itself.",
    },
    Anchor {
        id: ElementId::from_static("anchor-bottom-left"),
        label: "Delete",
        corner: Corner::BottomLeft,
        tip: "Blocking tip: the rest of the window ignores input until it is closed.",
    },
    Anchor {
        id: ElementId::from_static("anchor-bottom-right"),
        label: "Help",
        corner: Corner::BottomRight,
        tip: "Shown above the anchor.",
    },
];

/// Registers every anchor box for the given viewport.
pub fn layout(scene: &mut Scene, viewport: Size) {
    scene.resize(viewport);
    for anchor in &ANCHORS {
        scene.place(anchor.id.clone(), anchor.bounds(viewport));
    }
}
