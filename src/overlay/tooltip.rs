// SPDX-License-Identifier: MPL-2.0
//! Tooltips: messages positioned next to an anchor element.
//!
//! Showing a tooltip is two-phase. The show-delay reveal makes the body
//! visible, then a layout probe scheduled for the next painted frame measures
//! the anchor and the body and runs [`place`]. The probe lives in the same
//! timer set as the show-delay, so a newer request or an unmount drops it
//! before it can write a placement for a stale anchor.

use super::clock::SharedClock;
use super::controller::{Controller, OverlayRequest};
use super::geometry::{probe, Document, ElementId, LayoutError};
use super::lifecycle::{Phase, Transition};
use super::placement::{place, Placement, VerticalSide};
use super::relay::Relay;
use super::stack::OverlayKind;
use super::timers::TimerRole;
use crate::config::PlacementConfig;
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Parameters of a tooltip publish. An empty message hides the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRequest {
    pub message: String,
    /// Element the tooltip points at. Required to place a visible tooltip.
    pub anchor: Option<ElementId>,
    pub blocking: bool,
    pub duration: Option<Duration>,
    pub delay: Duration,
    /// Show a close button.
    pub closeable: bool,
    /// Force the vertical side instead of deriving it from the anchor.
    pub override_side: Option<VerticalSide>,
}

impl Default for TooltipRequest {
    fn default() -> Self {
        Self {
            message: String::new(),
            anchor: None,
            blocking: false,
            duration: None,
            delay: Duration::ZERO,
            closeable: true,
            override_side: None,
        }
    }
}

impl TooltipRequest {
    pub fn new(message: impl Into<String>, anchor: impl Into<ElementId>) -> Self {
        Self {
            message: message.into(),
            anchor: Some(anchor.into()),
            ..Self::default()
        }
    }

    /// The hide signal.
    #[must_use]
    pub fn hide() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn blocking(mut self, blocking: bool) -> Self {
        self.blocking = blocking;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn closeable(mut self, closeable: bool) -> Self {
        self.closeable = closeable;
        self
    }

    #[must_use]
    pub fn side(mut self, side: VerticalSide) -> Self {
        self.override_side = Some(side);
        self
    }
}

impl OverlayRequest for TooltipRequest {
    const KIND: OverlayKind = OverlayKind::Tooltip;

    fn is_hide(&self) -> bool {
        self.message.is_empty()
    }

    fn show_delay(&self) -> Option<Duration> {
        Some(self.delay)
    }

    fn auto_hide(&self) -> Option<Duration> {
        self.duration
    }

    fn is_dismissible(&self) -> bool {
        self.closeable
    }
}

/// Owned tooltip state for the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipView {
    pub visible: bool,
    pub request: Option<TooltipRequest>,
    /// `None` until the first layout pass after reveal.
    pub placement: Option<Placement>,
}

/// Controller for the tooltip overlay.
#[derive(Debug)]
pub struct TooltipController {
    inner: Controller<TooltipRequest>,
    placement: Cell<Option<Placement>>,
    config: PlacementConfig,
}

impl TooltipController {
    #[must_use]
    pub fn new(relay: Relay<TooltipRequest>, clock: SharedClock, config: PlacementConfig) -> Self {
        Self {
            inner: Controller::new(relay, clock),
            placement: Cell::new(None),
            config,
        }
    }

    #[must_use]
    pub fn relay(&self) -> Relay<TooltipRequest> {
        self.inner.relay()
    }

    pub fn mount(&self) {
        self.inner.mount();
    }

    pub fn unmount(&self) {
        self.inner.unmount();
        self.placement.set(None);
    }

    /// Applies due timers; a reveal schedules the post-paint layout probe.
    pub fn tick(&self) -> Vec<Transition> {
        let transitions = self.inner.tick();
        if transitions.is_empty() {
            return transitions;
        }
        self.placement.set(None);
        if transitions.contains(&Transition::Revealed) && self.inner.is_visible() {
            self.inner.with_lifecycle(|lifecycle| lifecycle.request_paint_probe());
        }
        transitions
    }

    /// Closes the tooltip if its request is closeable.
    pub fn close(&self) -> Option<Transition> {
        let transition = self.inner.close();
        if transition.is_some() {
            self.placement.set(None);
        }
        transition
    }

    /// Runs the pending post-paint layout probe, if one is scheduled.
    ///
    /// Returns `Ok(true)` when a placement was computed.
    ///
    /// # Errors
    ///
    /// Fails when the request has no anchor or the anchor is not in
    /// `document`. The tooltip stays visible, unplaced.
    pub fn after_paint<D: Document + ?Sized>(&self, document: &D) -> Result<bool, LayoutError> {
        if !self.inner.with_lifecycle(|lifecycle| lifecycle.take_paint_probe()) {
            return Ok(false);
        }
        self.layout(document)
    }

    /// Recomputes the placement of a visible tooltip, e.g. after a resize.
    ///
    /// # Errors
    ///
    /// Same as [`TooltipController::after_paint`].
    pub fn relayout<D: Document + ?Sized>(&self, document: &D) -> Result<bool, LayoutError> {
        if !self.inner.is_visible() {
            return Ok(false);
        }
        self.layout(document)
    }

    fn layout<D: Document + ?Sized>(&self, document: &D) -> Result<bool, LayoutError> {
        let Some(request) = self.inner.snapshot().payload else {
            return Ok(false);
        };
        let anchor_id = request.anchor.as_ref().ok_or(LayoutError::MissingAnchor)?;
        let anchor = probe(document, anchor_id)?;
        // An unmeasured body lays out as zero-sized.
        let body = probe(document, &ElementId::TOOLTIP_BODY).unwrap_or_default();

        let placement = place(
            &anchor,
            &body,
            request.override_side,
            document.viewport_size(),
            &self.config,
        );
        tracing::debug!(anchor = anchor_id.as_str(), ?placement, "tooltip placed");
        self.placement.set(Some(placement));
        Ok(true)
    }

    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.placement.get()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.phase()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.is_visible()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner.is_mounted()
    }

    #[must_use]
    pub fn is_pending(&self, role: TimerRole) -> bool {
        self.inner.is_pending(role)
    }

    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.inner.has_pending_work()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.next_deadline()
    }

    #[must_use]
    pub fn snapshot(&self) -> TooltipView {
        let state = self.inner.snapshot();
        TooltipView {
            visible: state.visible,
            placement: if state.visible { self.placement.get() } else { None },
            request: state.payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::clock::ManualClock;
    use crate::overlay::geometry::Scene;
    use crate::overlay::lifecycle::HideReason;
    use crate::overlay::placement::HorizontalSide;
    use iced::{Point, Rectangle, Size};
    use std::rc::Rc;

    const SAVE: ElementId = ElementId::from_static("save");

    fn mounted() -> (Rc<ManualClock>, Relay<TooltipRequest>, TooltipController) {
        let clock = Rc::new(ManualClock::new());
        let relay = Relay::new();
        let controller = TooltipController::new(relay.clone(), clock.clone(), PlacementConfig::default());
        controller.mount();
        (clock, relay, controller)
    }

    fn scene() -> Scene {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        scene.place(SAVE, Rectangle::new(Point::new(700.0, 20.0), Size::new(100.0, 30.0)));
        scene.place(
            ElementId::TOOLTIP_BODY,
            Rectangle::new(Point::new(0.0, 0.0), Size::new(200.0, 60.0)),
        );
        scene
    }

    #[test]
    fn defaults_match_publish_surface() {
        let request = TooltipRequest::new("Hi", SAVE);
        assert!(request.closeable);
        assert!(!request.blocking);
        assert_eq!(request.override_side, None);
        assert!(TooltipRequest::hide().is_hide());
    }

    #[test]
    fn reveal_then_paint_produces_a_placement() {
        let (_clock, relay, tooltip) = mounted();
        relay.publish(TooltipRequest::new("Save your work", SAVE));
        assert_eq!(tooltip.after_paint(&scene()), Ok(false));

        assert_eq!(tooltip.tick(), vec![Transition::Revealed]);
        assert!(tooltip.is_pending(TimerRole::LayoutProbe));
        assert_eq!(tooltip.snapshot().placement, None);

        assert_eq!(tooltip.after_paint(&scene()), Ok(true));
        let placement = tooltip.snapshot().placement.expect("placed");
        assert_eq!(placement.horizontal, HorizontalSide::Right);
        assert_eq!(placement.vertical, VerticalSide::Top);

        // The probe runs once per reveal.
        assert_eq!(tooltip.after_paint(&scene()), Ok(false));
    }

    #[test]
    fn new_request_drops_the_pending_probe() {
        let (clock, relay, tooltip) = mounted();
        relay.publish(TooltipRequest::new("first", SAVE));
        tooltip.tick();

        relay.publish(TooltipRequest::new("second", SAVE).delay(Duration::from_millis(300)));
        assert!(!tooltip.is_pending(TimerRole::LayoutProbe));
        assert_eq!(tooltip.after_paint(&scene()), Ok(false));

        clock.advance(Duration::from_millis(300));
        tooltip.tick();
        assert_eq!(tooltip.after_paint(&scene()), Ok(true));
    }

    #[test]
    fn missing_anchor_fails_at_measurement() {
        let (_clock, relay, tooltip) = mounted();
        relay.publish(TooltipRequest {
            message: "orphan".into(),
            ..TooltipRequest::default()
        });
        tooltip.tick();

        assert_eq!(tooltip.after_paint(&scene()), Err(LayoutError::MissingAnchor));
        assert!(tooltip.is_visible());
        assert_eq!(tooltip.placement(), None);
    }

    #[test]
    fn unknown_anchor_is_reported() {
        let (_clock, relay, tooltip) = mounted();
        relay.publish(TooltipRequest::new("gone", "removed-button"));
        tooltip.tick();

        assert_eq!(
            tooltip.after_paint(&scene()),
            Err(LayoutError::ElementNotFound(ElementId::from_static("removed-button")))
        );
    }

    #[test]
    fn unmeasured_body_degrades_to_zero_size() {
        let (_clock, relay, tooltip) = mounted();
        let mut scene = scene();
        scene.remove(&ElementId::TOOLTIP_BODY);
        relay.publish(TooltipRequest::new("Hi", SAVE));
        tooltip.tick();

        assert_eq!(tooltip.after_paint(&scene), Ok(true));
    }

    #[test]
    fn relayout_follows_viewport_resize() {
        let (_clock, relay, tooltip) = mounted();
        let mut scene = scene();
        assert_eq!(tooltip.relayout(&scene), Ok(false));

        relay.publish(TooltipRequest::new("Hi", SAVE));
        tooltip.tick();
        tooltip.after_paint(&scene).expect("placed");
        assert_eq!(tooltip.placement().map(|p| p.horizontal), Some(HorizontalSide::Right));

        scene.resize(Size::new(2000.0, 600.0));
        assert_eq!(tooltip.relayout(&scene), Ok(true));
        assert_eq!(tooltip.placement().map(|p| p.horizontal), Some(HorizontalSide::Left));
    }

    #[test]
    fn close_respects_closeable_flag() {
        let (_clock, relay, tooltip) = mounted();
        relay.publish(TooltipRequest::new("sticky", SAVE).closeable(false));
        tooltip.tick();
        assert_eq!(tooltip.close(), None);

        relay.publish(TooltipRequest::new("closeable", SAVE));
        tooltip.tick();
        assert_eq!(tooltip.close(), Some(Transition::Hidden(HideReason::Closed)));
        assert_eq!(tooltip.snapshot(), TooltipView::default());
    }

    #[test]
    fn unmount_prevents_late_layout_writes() {
        let (_clock, relay, tooltip) = mounted();
        relay.publish(TooltipRequest::new("Hi", SAVE));
        tooltip.tick();
        tooltip.unmount();

        assert_eq!(tooltip.after_paint(&scene()), Ok(false));
        assert_eq!(tooltip.placement(), None);
        assert!(!tooltip.is_mounted());
    }
}
