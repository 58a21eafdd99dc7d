// SPDX-License-Identifier: MPL-2.0
//! Single-subscriber relay between overlay producers and their controller.
//!
//! A [`Relay`] holds at most one handler. Producers keep a clone of the relay
//! and call [`Relay::publish`]; the controller registers itself with
//! [`Relay::attach`] when mounted and removes itself with [`Relay::detach`]
//! when unmounted. Publishing while nothing is attached is a silent no-op so
//! callers firing before the overlay exists never fail.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Handler<R> = Rc<dyn Fn(R)>;

/// A cloneable handle to a single-slot event channel.
///
/// All clones share the same slot. The relay is single-threaded: it is
/// neither `Send` nor `Sync`, matching the UI thread it lives on.
pub struct Relay<R> {
    slot: Rc<RefCell<Option<Handler<R>>>>,
}

impl<R> Relay<R> {
    /// Creates a relay with no handler attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Registers `handler` as the sole receiver of future publishes.
    ///
    /// Any previously attached handler is replaced (last attach wins).
    pub fn attach(&self, handler: impl Fn(R) + 'static) {
        let handler: Handler<R> = Rc::new(handler);
        if self.slot.borrow_mut().replace(handler).is_some() {
            tracing::debug!("relay handler replaced");
        }
    }

    /// Clears the attached handler. Does nothing when none is attached.
    pub fn detach(&self) {
        self.slot.borrow_mut().take();
    }

    /// Returns whether a handler is currently attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Invokes the attached handler synchronously with `request`.
    ///
    /// Without a handler the request is dropped. The handler may publish,
    /// attach or detach on this relay. A panicking handler unwinds into the
    /// caller.
    pub fn publish(&self, request: R) {
        let handler = self.slot.borrow().clone();
        match handler {
            Some(handler) => handler(request),
            None => tracing::trace!("publish dropped: no handler attached"),
        }
    }
}

impl<R> Default for Relay<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Relay<R> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<R> fmt::Debug for Relay<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relay")
            .field("attached", &self.is_attached())
            .finish()
    }
}
