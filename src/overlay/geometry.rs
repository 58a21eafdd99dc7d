// SPDX-License-Identifier: MPL-2.0
//! Layout probing: turning an element's on-screen box into document-relative
//! [`Geometry`].
//!
//! The rendering collaborator exposes its measured elements through the
//! [`Document`] trait. [`probe`] reads them fresh on every call; nothing is
//! cached between calls.

use iced::{Rectangle, Size, Vector};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Identifier of a measurable element (an anchor or the tooltip body).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(Cow<'static, str>);

impl ElementId {
    /// Element id under which renderers register the tooltip body.
    pub const TOOLTIP_BODY: ElementId = ElementId(Cow::Borrowed("overlay-tooltip-body"));

    /// Creates an id from a static name.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ElementId {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for ElementId {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why an element could not be measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A tooltip was requested without an anchor element.
    MissingAnchor,
    /// The document has no box for this element (not mounted, or removed).
    ElementNotFound(ElementId),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::MissingAnchor => write!(f, "tooltip request has no anchor element"),
            LayoutError::ElementNotFound(id) => write!(f, "element `{}` is not in the document", id),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Source of layout information, in the manner of a browser document.
pub trait Document {
    /// Viewport-relative box of `element`, or `None` when it is not laid out.
    fn bounding_rect(&self, element: &ElementId) -> Option<Rectangle>;

    /// Current scroll offset of the document.
    fn scroll_offset(&self) -> Vector;

    /// Client dimensions of the document body.
    fn client_size(&self) -> Size;

    /// Inner dimensions of the visible viewport.
    fn viewport_size(&self) -> Size;
}

/// Document-relative box of an element.
///
/// `top`/`left` include the scroll offset; `right`/`bottom` are distances from
/// the element's far edges to the far edges of the document body, so they do
/// not change while scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    /// Horizontal center in document coordinates.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    /// Vertical center in document coordinates.
    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// Measures `element` in `document`.
///
/// # Errors
///
/// Returns [`LayoutError::ElementNotFound`] when the document has no box for
/// the element.
pub fn probe<D: Document + ?Sized>(document: &D, element: &ElementId) -> Result<Geometry, LayoutError> {
    let rect = document
        .bounding_rect(element)
        .ok_or_else(|| LayoutError::ElementNotFound(element.clone()))?;
    let scroll = document.scroll_offset();
    let client = document.client_size();

    let width = finite(rect.width);
    let height = finite(rect.height);
    let left = finite(rect.x) + finite(scroll.x);
    let top = finite(rect.y) + finite(scroll.y);

    Ok(Geometry {
        top,
        right: finite(client.width) - (left + width),
        bottom: finite(client.height) - (top + height),
        left,
        width,
        height,
    })
}

/// Unmeasured values degrade to zero.
fn finite(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// An in-memory [`Document`]: a map of element boxes plus viewport state.
///
/// Renderers that compute their own layout register element boxes here.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: HashMap<ElementId, Rectangle>,
    scroll: Vector,
    client: Size,
    viewport: Size,
}

impl Scene {
    /// Creates an empty scene whose body fills a `viewport`-sized window.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            elements: HashMap::new(),
            scroll: Vector::new(0.0, 0.0),
            client: viewport,
            viewport,
        }
    }

    /// Resizes the viewport; the body client area follows it.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.client = viewport;
    }

    /// Overrides the body client area (e.g. a body larger than the window).
    pub fn set_client_size(&mut self, client: Size) {
        self.client = client;
    }

    pub fn scroll_to(&mut self, offset: Vector) {
        self.scroll = offset;
    }

    /// Registers or moves an element.
    pub fn place(&mut self, element: impl Into<ElementId>, bounds: Rectangle) {
        self.elements.insert(element.into(), bounds);
    }

    /// Removes an element; returns whether it was present.
    pub fn remove(&mut self, element: &ElementId) -> bool {
        self.elements.remove(element).is_some()
    }
}

impl Document for Scene {
    fn bounding_rect(&self, element: &ElementId) -> Option<Rectangle> {
        self.elements.get(element).copied()
    }

    fn scroll_offset(&self) -> Vector {
        self.scroll
    }

    fn client_size(&self) -> Size {
        self.client
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn element_ids_keep_their_name() {
        assert_eq!(ElementId::TOOLTIP_BODY.as_str(), "overlay-tooltip-body");
        assert_eq!(ElementId::from(String::from("save")).as_str(), "save");
        assert_eq!(ElementId::from_static("save"), ElementId::from(String::from("save")));
    }

    const ANCHOR: ElementId = ElementId::from_static("anchor");

    #[test]
    fn probe_measures_far_edges_against_the_body() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        scene.place(ANCHOR, Rectangle::new(Point::new(100.0, 50.0), Size::new(200.0, 40.0)));

        let geometry = probe(&scene, &ANCHOR).expect("anchor is placed");

        assert_eq!(
            geometry,
            Geometry {
                top: 50.0,
                right: 500.0,
                bottom: 510.0,
                left: 100.0,
                width: 200.0,
                height: 40.0,
            }
        );
    }

    #[test]
    fn scrolling_shifts_near_edges_and_far_edges_together() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        scene.set_client_size(Size::new(800.0, 2000.0));
        scene.place(ANCHOR, Rectangle::new(Point::new(10.0, 100.0), Size::new(50.0, 20.0)));
        let before = probe(&scene, &ANCHOR).expect("anchor is placed");

        // Scrolling moves the box up in the viewport by the same amount.
        scene.scroll_to(Vector::new(0.0, 300.0));
        scene.place(ANCHOR, Rectangle::new(Point::new(10.0, -200.0), Size::new(50.0, 20.0)));
        let after = probe(&scene, &ANCHOR).expect("anchor is placed");

        assert_eq!(before, after);
    }

    #[test]
    fn missing_element_is_reported() {
        let scene = Scene::new(Size::new(800.0, 600.0));
        assert_eq!(
            probe(&scene, &ANCHOR),
            Err(LayoutError::ElementNotFound(ANCHOR))
        );
    }

    #[test]
    fn non_finite_measurements_degrade_to_zero() {
        let mut scene = Scene::new(Size::new(100.0, 100.0));
        scene.place(
            ANCHOR,
            Rectangle::new(Point::new(f32::NAN, 0.0), Size::new(f32::INFINITY, 0.0)),
        );

        let geometry = probe(&scene, &ANCHOR).expect("anchor is placed");
        assert_eq!(geometry.left, 0.0);
        assert_eq!(geometry.width, 0.0);
        assert_eq!(geometry.right, 100.0);
    }
}
