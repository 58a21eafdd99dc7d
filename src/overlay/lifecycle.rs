// SPDX-License-Identifier: MPL-2.0
//! The `Idle → PendingShow → Visible → Idle` state machine shared by every
//! overlay kind.
//!
//! Every inbound request cancels all pending timers before touching state, so
//! a delayed show from an older request can never revive it, and hides are
//! always immediate.

use super::clock::SharedClock;
use super::timers::{TimerRole, TimerSet};
use std::time::{Duration, Instant};

/// Visibility phase of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing shown, nothing pending.
    #[default]
    Idle,
    /// A show-delay timer is running.
    PendingShow,
    /// The payload is on screen.
    Visible,
}

/// Why an overlay went back to [`Phase::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideReason {
    /// A hide request arrived through the relay.
    Requested,
    /// The auto-hide duration elapsed.
    Expired,
    /// The user closed it (close button or background click).
    Closed,
    /// The controller was unmounted.
    Unmounted,
}

/// Observable state change produced by the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The overlay became visible.
    Revealed,
    /// The overlay went back to idle.
    Hidden(HideReason),
}

/// Owned snapshot of an overlay's visibility, handed to the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityState<P> {
    pub visible: bool,
    pub payload: Option<P>,
}

impl<P> Default for VisibilityState<P> {
    fn default() -> Self {
        Self {
            visible: false,
            payload: None,
        }
    }
}

enum Step<P> {
    Reveal {
        payload: P,
        auto_hide: Option<Duration>,
    },
    Expire,
    Measure,
}

/// Visibility state plus the timers that drive it.
#[derive(Debug)]
pub struct Lifecycle<P> {
    phase: Phase,
    payload: Option<P>,
    timers: TimerSet<Step<P>>,
}

impl<P> std::fmt::Debug for Step<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Reveal { auto_hide, .. } => f
                .debug_struct("Reveal")
                .field("auto_hide", auto_hide)
                .finish_non_exhaustive(),
            Step::Expire => f.write_str("Expire"),
            Step::Measure => f.write_str("Measure"),
        }
    }
}

impl<P> Lifecycle<P> {
    #[must_use]
    pub fn new(clock: SharedClock) -> Self {
        Self {
            phase: Phase::Idle,
            payload: None,
            timers: TimerSet::new(clock),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Visible
    }

    /// Returns the payload currently on screen.
    #[must_use]
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Preempts whatever is pending or showing and schedules `payload` to
    /// appear after `delay`.
    ///
    /// A visible overlay is taken down immediately; it is not kept on screen
    /// while the new request waits.
    pub fn request_show(&mut self, payload: P, delay: Duration, auto_hide: Option<Duration>) {
        self.timers.cancel_all();
        self.payload = None;
        self.timers
            .schedule_show_delay(Step::Reveal { payload, auto_hide }, delay);
        self.phase = Phase::PendingShow;
    }

    /// Shows `payload` right away, without going through a show-delay.
    pub fn show_now(&mut self, payload: P, auto_hide: Option<Duration>) -> Transition {
        self.timers.cancel_all();
        self.reveal(payload, auto_hide)
    }

    /// Cancels everything and returns to idle.
    ///
    /// Returns `None` when the overlay was already idle.
    pub fn hide(&mut self, reason: HideReason) -> Option<Transition> {
        self.timers.cancel_all();
        self.payload = None;
        let was = std::mem::replace(&mut self.phase, Phase::Idle);
        (was != Phase::Idle).then_some(Transition::Hidden(reason))
    }

    /// Applies every timer that is due, in deadline order.
    pub fn tick(&mut self) -> Vec<Transition> {
        let mut transitions = Vec::new();
        while let Some(step) = self.timers.pop_due() {
            match step {
                Step::Reveal { payload, auto_hide } => {
                    transitions.push(self.reveal(payload, auto_hide));
                }
                Step::Expire => {
                    transitions.extend(self.hide(HideReason::Expired));
                }
                // Never stored as a timed step.
                Step::Measure => {}
            }
        }
        transitions
    }

    /// Requests a layout measurement once the next frame is painted.
    pub fn request_paint_probe(&mut self) {
        self.timers.schedule_after_paint(Step::Measure);
    }

    /// Consumes the pending layout measurement, if any.
    pub fn take_paint_probe(&mut self) -> bool {
        self.timers.take_after_paint().is_some()
    }

    #[must_use]
    pub fn is_pending(&self, role: TimerRole) -> bool {
        self.timers.is_pending(role)
    }

    /// Returns whether any timer or frame probe is outstanding.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.timers.is_empty()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn reveal(&mut self, payload: P, auto_hide: Option<Duration>) -> Transition {
        self.payload = Some(payload);
        self.phase = Phase::Visible;
        self.timers.schedule_auto_hide(Step::Expire, auto_hide);
        Transition::Revealed
    }
}

impl<P: Clone> Lifecycle<P> {
    /// Returns an owned snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> VisibilityState<P> {
        VisibilityState {
            visible: self.is_visible(),
            payload: self.payload.clone(),
        }
    }
}
