// SPDX-License-Identifier: MPL-2.0
//! Generic overlay controller: binds a [`Relay`] to a [`Lifecycle`].
//!
//! A controller is created with the relay its producers publish to. While
//! mounted it is the relay's handler; every request replaces whatever is
//! pending or showing. Unmounting detaches from the relay and drops every
//! pending timer so nothing fires after teardown.

use super::clock::SharedClock;
use super::lifecycle::{HideReason, Lifecycle, Phase, Transition, VisibilityState};
use super::relay::Relay;
use super::stack::OverlayKind;
use super::timers::TimerRole;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A request that can be published to an overlay controller.
pub trait OverlayRequest: Clone + 'static {
    /// Which overlay kind handles this request.
    const KIND: OverlayKind;

    /// Whether this request is the "hide now" signal.
    fn is_hide(&self) -> bool;

    /// Delay before showing, or `None` to show synchronously.
    fn show_delay(&self) -> Option<Duration>;

    /// How long the overlay stays up; `None` keeps it until hidden.
    fn auto_hide(&self) -> Option<Duration>;

    /// Whether the user may close the overlay by hand.
    fn is_dismissible(&self) -> bool;
}

/// Owner of one overlay kind's visibility state.
pub struct Controller<R: OverlayRequest> {
    relay: Relay<R>,
    lifecycle: Rc<RefCell<Lifecycle<R>>>,
}

impl<R: OverlayRequest> Controller<R> {
    /// Creates an unmounted controller listening on `relay` once mounted.
    #[must_use]
    pub fn new(relay: Relay<R>, clock: SharedClock) -> Self {
        Self {
            relay,
            lifecycle: Rc::new(RefCell::new(Lifecycle::new(clock))),
        }
    }

    /// Returns a producer handle for this controller's relay.
    #[must_use]
    pub fn relay(&self) -> Relay<R> {
        self.relay.clone()
    }

    /// Attaches to the relay. Mounting twice simply re-attaches.
    pub fn mount(&self) {
        let lifecycle = Rc::downgrade(&self.lifecycle);
        self.relay.attach(move |request: R| {
            if let Some(lifecycle) = lifecycle.upgrade() {
                handle_request(&mut lifecycle.borrow_mut(), request);
            }
        });
        tracing::debug!(kind = ?R::KIND, "overlay mounted");
    }

    /// Detaches from the relay and cancels all pending timers.
    pub fn unmount(&self) {
        self.relay.detach();
        if let Some(transition) = self.lifecycle.borrow_mut().hide(HideReason::Unmounted) {
            tracing::debug!(kind = ?R::KIND, ?transition, "overlay torn down while active");
        }
        tracing::debug!(kind = ?R::KIND, "overlay unmounted");
    }

    /// Applies due timers.
    pub fn tick(&self) -> Vec<Transition> {
        let transitions = self.lifecycle.borrow_mut().tick();
        for transition in &transitions {
            tracing::debug!(kind = ?R::KIND, ?transition, "overlay timer fired");
        }
        transitions
    }

    /// Closes a visible overlay on user request.
    ///
    /// Ignored unless the overlay is visible and its request allows manual
    /// closing.
    pub fn close(&self) -> Option<Transition> {
        let mut lifecycle = self.lifecycle.borrow_mut();
        let dismissible = lifecycle
            .payload()
            .is_some_and(|request| request.is_dismissible());
        if !lifecycle.is_visible() || !dismissible {
            return None;
        }
        let transition = lifecycle.hide(HideReason::Closed);
        tracing::debug!(kind = ?R::KIND, "overlay closed by user");
        transition
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lifecycle.borrow().phase()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.lifecycle.borrow().is_visible()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.relay.is_attached()
    }

    /// Owned copy of the visibility state for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> VisibilityState<R> {
        self.lifecycle.borrow().snapshot()
    }

    #[must_use]
    pub fn is_pending(&self, role: TimerRole) -> bool {
        self.lifecycle.borrow().is_pending(role)
    }

    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.lifecycle.borrow().has_pending_work()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.lifecycle.borrow().next_deadline()
    }

    pub(crate) fn with_lifecycle<T>(&self, f: impl FnOnce(&mut Lifecycle<R>) -> T) -> T {
        f(&mut self.lifecycle.borrow_mut())
    }
}

fn handle_request<R: OverlayRequest>(lifecycle: &mut Lifecycle<R>, request: R) {
    if request.is_hide() {
        if let Some(transition) = lifecycle.hide(HideReason::Requested) {
            tracing::debug!(kind = ?R::KIND, ?transition, "overlay hide requested");
        }
        return;
    }

    let auto_hide = request.auto_hide();
    match request.show_delay() {
        Some(delay) => {
            tracing::debug!(kind = ?R::KIND, ?delay, ?auto_hide, "overlay show scheduled");
            lifecycle.request_show(request, delay, auto_hide);
        }
        None => {
            tracing::debug!(kind = ?R::KIND, ?auto_hide, "overlay shown");
            lifecycle.show_now(request, auto_hide);
        }
    }
}

impl<R: OverlayRequest> Drop for Controller<R> {
    fn drop(&mut self) {
        if self.is_mounted() {
            self.unmount();
        }
    }
}

impl<R: OverlayRequest> fmt::Debug for Controller<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("kind", &R::KIND)
            .field("mounted", &self.is_mounted())
            .field("phase", &self.phase())
            .finish()
    }
}
