// SPDX-License-Identifier: MPL-2.0
//! Fullscreen dialog requests.
//!
//! Dialogs appear synchronously when published and never hide on their own.
//! They close through an empty request, or through the close button and
//! background click when the request is `cancellable`.

use super::controller::{Controller, OverlayRequest};
use super::stack::OverlayKind;
use std::time::Duration;

/// Controller for the dialog overlay.
pub type DialogController = Controller<DialogRequest>;

/// Parameters of a dialog publish. Empty content hides the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub content: String,
    /// Allow closing via the close button or a background click.
    pub cancellable: bool,
    /// Optional style variant applied to the outer dialog.
    pub class_name: Option<String>,
}

impl DialogRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            cancellable: true,
            class_name: None,
        }
    }

    /// The hide signal.
    #[must_use]
    pub fn hide() -> Self {
        Self::new(String::new())
    }

    #[must_use]
    pub fn cancellable(mut self, cancellable: bool) -> Self {
        self.cancellable = cancellable;
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

impl OverlayRequest for DialogRequest {
    const KIND: OverlayKind = OverlayKind::Dialog;

    fn is_hide(&self) -> bool {
        self.content.is_empty()
    }

    fn show_delay(&self) -> Option<Duration> {
        None
    }

    fn auto_hide(&self) -> Option<Duration> {
        None
    }

    fn is_dismissible(&self) -> bool {
        self.cancellable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::clock::ManualClock;
    use crate::overlay::lifecycle::{HideReason, Phase, Transition};
    use crate::overlay::relay::Relay;
    use std::rc::Rc;

    fn mounted() -> (Rc<ManualClock>, Relay<DialogRequest>, DialogController) {
        let clock = Rc::new(ManualClock::new());
        let relay = Relay::new();
        let controller = DialogController::new(relay.clone(), clock.clone());
        controller.mount();
        (clock, relay, controller)
    }

    #[test]
    fn dialog_shows_synchronously_and_stays() {
        let (clock, relay, dialog) = mounted();
        relay.publish(DialogRequest::new("Delete file?").class_name("wide"));

        assert_eq!(dialog.phase(), Phase::Visible);
        assert!(!dialog.has_pending_work());

        clock.advance(Duration::from_secs(3600));
        assert!(dialog.tick().is_empty());
        let payload = dialog.snapshot().payload.expect("dialog visible");
        assert_eq!(payload.class_name.as_deref(), Some("wide"));
    }

    #[test]
    fn non_cancellable_dialog_ignores_manual_close() {
        let (_clock, relay, dialog) = mounted();
        relay.publish(DialogRequest::new("Working...").cancellable(false));

        assert_eq!(dialog.close(), None);
        assert!(dialog.is_visible());

        relay.publish(DialogRequest::hide());
        assert!(!dialog.is_visible());
    }

    #[test]
    fn cancellable_dialog_closes_on_request() {
        let (_clock, relay, dialog) = mounted();
        relay.publish(DialogRequest::new("Hello"));

        assert_eq!(dialog.close(), Some(Transition::Hidden(HideReason::Closed)));
        assert_eq!(dialog.close(), None);
    }

    #[test]
    fn new_dialog_replaces_the_current_one() {
        let (_clock, relay, dialog) = mounted();
        relay.publish(DialogRequest::new("first"));
        relay.publish(DialogRequest::new("second").cancellable(false));

        let payload = dialog.snapshot().payload.expect("dialog visible");
        assert_eq!(payload.content, "second");
        assert!(!payload.cancellable);
    }
}
