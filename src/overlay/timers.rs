// SPDX-License-Identifier: MPL-2.0
//! Cancellable delayed actions, one slot per role.
//!
//! A [`TimerSet`] never runs anything by itself. The owner polls it with
//! [`TimerSet::pop_due`] (timed roles) and [`TimerSet::take_after_paint`]
//! (the frame-based layout probe) and applies the returned actions. Keeping the
//! actions inside the set means cancelling a role drops its action, so a stale
//! callback can never run after a newer request or an unmount.

use super::clock::SharedClock;
use std::fmt;
use std::time::{Duration, Instant};

/// The kinds of pending work an overlay can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerRole {
    /// Wait before a requested overlay becomes visible.
    ShowDelay,
    /// Hide a visible overlay after its duration.
    AutoHide,
    /// Measure layout once the next frame has been painted.
    LayoutProbe,
}

struct Pending<A> {
    deadline: Instant,
    action: A,
}

/// At most one pending action per [`TimerRole`].
pub struct TimerSet<A> {
    clock: SharedClock,
    show_delay: Option<Pending<A>>,
    auto_hide: Option<Pending<A>>,
    layout_probe: Option<A>,
}

impl<A> TimerSet<A> {
    /// Creates an empty set reading time from `clock`.
    #[must_use]
    pub fn new(clock: SharedClock) -> Self {
        Self {
            clock,
            show_delay: None,
            auto_hide: None,
            layout_probe: None,
        }
    }

    /// Schedules `action` to become due after `delay`, replacing any pending
    /// show-delay.
    ///
    /// A zero delay is still deferred to the next poll.
    pub fn schedule_show_delay(&mut self, action: A, delay: Duration) {
        self.show_delay = Some(Pending {
            deadline: self.clock.now() + delay,
            action,
        });
    }

    /// Schedules `action` to become due after `duration`, replacing any
    /// pending auto-hide.
    ///
    /// `None` or a zero duration means "no auto-hide": nothing is scheduled
    /// and `false` is returned.
    pub fn schedule_auto_hide(&mut self, action: A, duration: Option<Duration>) -> bool {
        match duration.filter(|d| !d.is_zero()) {
            Some(duration) => {
                self.auto_hide = Some(Pending {
                    deadline: self.clock.now() + duration,
                    action,
                });
                true
            }
            None => false,
        }
    }

    /// Schedules `action` for the next painted frame, replacing any pending
    /// layout probe.
    pub fn schedule_after_paint(&mut self, action: A) {
        self.layout_probe = Some(action);
    }

    /// Cancels the pending action for `role`. Returns whether one was pending.
    pub fn cancel(&mut self, role: TimerRole) -> bool {
        match role {
            TimerRole::ShowDelay => self.show_delay.take().is_some(),
            TimerRole::AutoHide => self.auto_hide.take().is_some(),
            TimerRole::LayoutProbe => self.layout_probe.take().is_some(),
        }
    }

    /// Cancels every pending role.
    pub fn cancel_all(&mut self) {
        self.show_delay = None;
        self.auto_hide = None;
        self.layout_probe = None;
    }

    /// Returns whether an action is pending for `role`.
    #[must_use]
    pub fn is_pending(&self, role: TimerRole) -> bool {
        match role {
            TimerRole::ShowDelay => self.show_delay.is_some(),
            TimerRole::AutoHide => self.auto_hide.is_some(),
            TimerRole::LayoutProbe => self.layout_probe.is_some(),
        }
    }

    /// Returns whether nothing at all is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.show_delay.is_none() && self.auto_hide.is_none() && self.layout_probe.is_none()
    }

    /// Returns the earliest deadline among the timed roles.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [&self.show_delay, &self.auto_hide]
            .into_iter()
            .flatten()
            .map(|pending| pending.deadline)
            .min()
    }

    /// Removes and returns the earliest timed action whose deadline has passed.
    ///
    /// On equal deadlines the show-delay comes first.
    pub fn pop_due(&mut self) -> Option<A> {
        let now = self.clock.now();
        let show_due = self.show_delay.as_ref().map(|p| p.deadline).filter(|d| *d <= now);
        let hide_due = self.auto_hide.as_ref().map(|p| p.deadline).filter(|d| *d <= now);

        let slot = match (show_due, hide_due) {
            (Some(show), Some(hide)) if hide < show => &mut self.auto_hide,
            (Some(_), _) => &mut self.show_delay,
            (None, Some(_)) => &mut self.auto_hide,
            (None, None) => return None,
        };
        slot.take().map(|pending| pending.action)
    }

    /// Removes and returns the pending layout probe, if any.
    pub fn take_after_paint(&mut self) -> Option<A> {
        self.layout_probe.take()
    }
}

impl<A> fmt::Debug for TimerSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerSet")
            .field("show_delay", &self.show_delay.as_ref().map(|p| p.deadline))
            .field("auto_hide", &self.auto_hide.as_ref().map(|p| p.deadline))
            .field("layout_probe", &self.layout_probe.is_some())
            .finish()
    }
}
