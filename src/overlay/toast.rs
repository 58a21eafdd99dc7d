// SPDX-License-Identifier: MPL-2.0
//! Toast requests: short-lived messages shown at the top or bottom of the
//! window.
//!
//! ```ignore
//! relays.toast.publish(ToastRequest::new("Saved").duration(Duration::from_secs(2)));
//! relays.toast.publish(ToastRequest::hide());
//! ```

use super::controller::{Controller, OverlayRequest};
use super::stack::OverlayKind;
use std::time::Duration;

/// Controller for the toast overlay.
pub type ToastController = Controller<ToastRequest>;

/// Parameters of a toast publish. An empty message hides the toast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastRequest {
    pub message: String,
    /// Swallow user input while the toast is visible.
    pub blocking: bool,
    /// Hide automatically after this long; `None` keeps it until hidden.
    pub duration: Option<Duration>,
    /// Wait this long before showing.
    pub delay: Duration,
    /// Show near the top edge instead of the bottom.
    pub at_top: bool,
}

impl ToastRequest {
    /// A non-blocking toast shown on the next tick until hidden.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
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
    pub fn at_top(mut self, at_top: bool) -> Self {
        self.at_top = at_top;
        self
    }
}

impl OverlayRequest for ToastRequest {
    const KIND: OverlayKind = OverlayKind::Toast;

    fn is_hide(&self) -> bool {
        self.message.is_empty()
    }

    fn show_delay(&self) -> Option<Duration> {
        Some(self.delay)
    }

    fn auto_hide(&self) -> Option<Duration> {
        self.duration
    }

    /// Toasts leave only on a hide request or when their duration ends.
    fn is_dismissible(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::clock::ManualClock;
    use crate::overlay::lifecycle::{HideReason, Phase, Transition};
    use crate::overlay::relay::Relay;
    use crate::overlay::timers::TimerRole;
    use std::rc::Rc;

    fn mounted() -> (Rc<ManualClock>, Relay<ToastRequest>, ToastController) {
        let clock = Rc::new(ManualClock::new());
        let relay = Relay::new();
        let controller = ToastController::new(relay.clone(), clock.clone());
        controller.mount();
        (clock, relay, controller)
    }

    #[test]
    fn defaults_match_publish_surface() {
        let request = ToastRequest::new("Hi");
        assert!(!request.blocking);
        assert_eq!(request.duration, None);
        assert_eq!(request.delay, Duration::ZERO);
        assert!(!request.at_top);
        assert!(ToastRequest::hide().is_hide());
    }

    #[test]
    fn zero_delay_toast_is_visible_after_tick_then_expires() {
        let (clock, relay, toast) = mounted();
        relay.publish(ToastRequest::new("Hi").duration(Duration::from_millis(1000)));
        assert_eq!(toast.phase(), Phase::PendingShow);

        assert_eq!(toast.tick(), vec![Transition::Revealed]);
        assert_eq!(toast.snapshot().payload.map(|t| t.message), Some("Hi".to_string()));

        clock.advance(Duration::from_millis(999));
        assert!(toast.tick().is_empty());
        assert!(toast.is_visible());

        clock.advance(Duration::from_millis(1));
        assert_eq!(toast.tick(), vec![Transition::Hidden(HideReason::Expired)]);
        assert_eq!(toast.phase(), Phase::Idle);
    }

    #[test]
    fn rapid_requests_only_show_the_last_one() {
        let (clock, relay, toast) = mounted();
        let delay = Duration::from_millis(200);
        relay.publish(ToastRequest::new("A").delay(delay));
        clock.advance(Duration::from_millis(100));
        relay.publish(ToastRequest::new("B").delay(delay));

        let mut shown = Vec::new();
        for _ in 0..10 {
            clock.advance(Duration::from_millis(50));
            if toast.tick().contains(&Transition::Revealed) {
                shown.extend(toast.snapshot().payload.map(|t| t.message));
            }
        }

        assert_eq!(shown, vec!["B".to_string()]);
    }

    #[test]
    fn hide_request_is_immediate_and_cancels_timers() {
        let (_clock, relay, toast) = mounted();
        relay.publish(ToastRequest::new("Hi").duration(Duration::from_secs(3)));
        toast.tick();
        assert!(toast.is_pending(TimerRole::AutoHide));

        relay.publish(ToastRequest::hide());

        assert_eq!(toast.phase(), Phase::Idle);
        assert!(!toast.has_pending_work());
    }

    #[test]
    fn unmount_stops_a_pending_show() {
        let (clock, relay, toast) = mounted();
        relay.publish(ToastRequest::new("late").delay(Duration::from_millis(100)));
        toast.unmount();

        clock.advance(Duration::from_secs(1));
        assert!(toast.tick().is_empty());
        assert_eq!(toast.phase(), Phase::Idle);

        // Producers keep publishing into the void.
        relay.publish(ToastRequest::new("ignored"));
        assert_eq!(toast.phase(), Phase::Idle);
    }

    #[test]
    fn blocking_toast_cannot_be_closed_by_the_user() {
        let (clock, relay, toast) = mounted();
        relay.publish(
            ToastRequest::new("Working, please wait")
                .blocking(true)
                .duration(Duration::from_secs(5)),
        );
        toast.tick();
        assert!(toast.is_visible());

        assert_eq!(toast.close(), None);
        assert!(toast.is_visible());

        clock.advance(Duration::from_secs(5));
        assert_eq!(toast.tick(), vec![Transition::Hidden(HideReason::Expired)]);
        assert!(!toast.is_visible());
    }
}
