// SPDX-License-Identifier: MPL-2.0
//! The overlay stack: one controller per overlay kind, in a fixed layer order.
//!
//! The stack is the composition root for overlays. It creates one relay per
//! kind, hands clones of them to producers through [`Relays`], and drives the
//! controllers from the host's event loop (`tick`, `after_paint`,
//! `relayout`).

use super::clock::SharedClock;
use super::dialog::{DialogController, DialogRequest};
use super::geometry::Document;
use super::lifecycle::Transition;
use super::relay::Relay;
use super::toast::{ToastController, ToastRequest};
use super::tooltip::{TooltipController, TooltipRequest};
use crate::config::Config;
use crate::error::Result;
use std::time::Instant;

/// The overlay kinds, one controller each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Toast,
    Tooltip,
    Dialog,
}

/// Layer order, outermost first: toasts paint above tooltips, tooltips above
/// dialogs, dialogs above application content.
pub const LAYER_ORDER: [OverlayKind; 3] = [OverlayKind::Toast, OverlayKind::Tooltip, OverlayKind::Dialog];

/// Producer handles, one relay per overlay kind.
#[derive(Debug, Clone, Default)]
pub struct Relays {
    pub toast: Relay<ToastRequest>,
    pub tooltip: Relay<TooltipRequest>,
    pub dialog: Relay<DialogRequest>,
}

/// Relays an embedding host already serves with its own overlays.
///
/// Every kind left as `None` is owned by the embedded stack.
#[derive(Debug, Clone, Default)]
pub struct HostRelays {
    pub toast: Option<Relay<ToastRequest>>,
    pub tooltip: Option<Relay<TooltipRequest>>,
    pub dialog: Option<Relay<DialogRequest>>,
}

impl HostRelays {
    fn provides(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Toast => self.toast.is_some(),
            OverlayKind::Tooltip => self.tooltip.is_some(),
            OverlayKind::Dialog => self.dialog.is_some(),
        }
    }
}

/// Owns the controllers of every overlay layer it renders.
#[derive(Debug)]
pub struct OverlayStack {
    relays: Relays,
    layers: Vec<OverlayKind>,
    toast: ToastController,
    tooltip: TooltipController,
    dialog: DialogController,
}

impl OverlayStack {
    /// A full stack owning all three layers.
    #[must_use]
    pub fn new(config: &Config, clock: SharedClock) -> Self {
        Self::embedded(HostRelays::default(), config, clock)
    }

    /// A stack nested inside a host that already serves some overlay kinds.
    ///
    /// Publishes for a host-provided kind go to the host's relay; this stack
    /// neither mounts nor renders that layer. The remaining layers keep
    /// [`LAYER_ORDER`].
    #[must_use]
    pub fn embedded(host: HostRelays, config: &Config, clock: SharedClock) -> Self {
        let layers: Vec<OverlayKind> = LAYER_ORDER
            .into_iter()
            .filter(|kind| !host.provides(*kind))
            .collect();

        let own = Relays::default();
        let toast = ToastController::new(own.toast.clone(), clock.clone());
        let tooltip = TooltipController::new(own.tooltip.clone(), clock.clone(), config.placement);
        let dialog = DialogController::new(own.dialog.clone(), clock);

        let relays = Relays {
            toast: host.toast.unwrap_or(own.toast),
            tooltip: host.tooltip.unwrap_or(own.tooltip),
            dialog: host.dialog.unwrap_or(own.dialog),
        };

        tracing::debug!(?layers, "overlay stack created");
        Self {
            relays,
            layers,
            toast,
            tooltip,
            dialog,
        }
    }

    /// Layers this stack renders, outermost first.
    #[must_use]
    pub fn layers(&self) -> &[OverlayKind] {
        &self.layers
    }

    #[must_use]
    pub fn owns(&self, kind: OverlayKind) -> bool {
        self.layers.contains(&kind)
    }

    /// Producer handles. Cheap to clone and hand out.
    #[must_use]
    pub fn relays(&self) -> &Relays {
        &self.relays
    }

    /// Attaches every owned controller to its relay.
    pub fn mount(&self) {
        for kind in &self.layers {
            match kind {
                OverlayKind::Toast => self.toast.mount(),
                OverlayKind::Tooltip => self.tooltip.mount(),
                OverlayKind::Dialog => self.dialog.mount(),
            }
        }
    }

    /// Detaches every owned controller and drops its pending timers.
    pub fn unmount(&self) {
        for kind in &self.layers {
            match kind {
                OverlayKind::Toast => self.toast.unmount(),
                OverlayKind::Tooltip => self.tooltip.unmount(),
                OverlayKind::Dialog => self.dialog.unmount(),
            }
        }
    }

    /// Applies due timers on every owned layer.
    pub fn tick(&self) -> Vec<(OverlayKind, Transition)> {
        let mut transitions = Vec::new();
        for kind in &self.layers {
            let fired = match kind {
                OverlayKind::Toast => self.toast.tick(),
                OverlayKind::Tooltip => self.tooltip.tick(),
                OverlayKind::Dialog => self.dialog.tick(),
            };
            transitions.extend(fired.into_iter().map(|transition| (*kind, transition)));
        }
        transitions
    }

    /// Runs deferred layout work once a frame has been painted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Layout`] when the tooltip anchor cannot
    /// be measured.
    pub fn after_paint<D: Document + ?Sized>(&self, document: &D) -> Result<()> {
        if self.owns(OverlayKind::Tooltip) {
            self.tooltip.after_paint(document)?;
        }
        Ok(())
    }

    /// Recomputes layout-dependent state after a viewport change.
    ///
    /// # Errors
    ///
    /// Same as [`OverlayStack::after_paint`].
    pub fn relayout<D: Document + ?Sized>(&self, document: &D) -> Result<()> {
        if self.owns(OverlayKind::Tooltip) {
            self.tooltip.relayout(document)?;
        }
        Ok(())
    }

    /// Earliest timer deadline across owned layers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.layers
            .iter()
            .filter_map(|kind| match kind {
                OverlayKind::Toast => self.toast.next_deadline(),
                OverlayKind::Tooltip => self.tooltip.next_deadline(),
                OverlayKind::Dialog => self.dialog.next_deadline(),
            })
            .min()
    }

    /// Whether any owned layer waits on a timer or a paint.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.layers.iter().any(|kind| match kind {
            OverlayKind::Toast => self.toast.has_pending_work(),
            OverlayKind::Tooltip => self.tooltip.has_pending_work(),
            OverlayKind::Dialog => self.dialog.has_pending_work(),
        })
    }

    #[must_use]
    pub fn toast(&self) -> &ToastController {
        &self.toast
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipController {
        &self.tooltip
    }

    #[must_use]
    pub fn dialog(&self) -> &DialogController {
        &self.dialog
    }
}

impl Drop for OverlayStack {
    fn drop(&mut self) {
        self.unmount();
    }
}
