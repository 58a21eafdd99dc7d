// SPDX-License-Identifier: MPL-2.0
//! Composes application content with the overlay layers.
//!
//! Layers are painted bottom-up: content, then each owned overlay in reverse
//! [`LAYER_ORDER`], so the outermost overlay (the toast) ends up on top.
//! Blocking toasts and tooltips get an input-swallowing backdrop directly
//! beneath them.

use super::design_tokens::opacity;
use super::{dialog, styles, toast, tooltip};
use crate::overlay::{
    DialogRequest, OverlayKind, OverlayStack, ToastRequest, TooltipView, VisibilityState,
    LAYER_ORDER,
};
use iced::widget::{opaque, Container, Stack};
use iced::{Element, Length, Size};

/// Owned snapshot of every layer, taken once per `view`.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub layers: Vec<OverlayKind>,
    pub toast: VisibilityState<ToastRequest>,
    pub tooltip: TooltipView,
    pub dialog: VisibilityState<DialogRequest>,
}

impl Snapshot {
    #[must_use]
    pub fn capture(stack: &OverlayStack) -> Self {
        Self {
            layers: stack.layers().to_vec(),
            toast: stack.toast().snapshot(),
            tooltip: stack.tooltip().snapshot(),
            dialog: stack.dialog().snapshot(),
        }
    }

    /// Kinds to paint, bottom-most first.
    pub fn paint_order(&self) -> impl Iterator<Item = OverlayKind> + '_ {
        LAYER_ORDER
            .into_iter()
            .rev()
            .filter(|kind| self.layers.contains(kind))
    }

    /// Whether the visible overlay of `kind` blocks input to what lies below.
    #[must_use]
    pub fn is_blocking(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Toast => {
                self.toast.visible && self.toast.payload.as_ref().is_some_and(|t| t.blocking)
            }
            OverlayKind::Tooltip => {
                self.tooltip.visible
                    && self.tooltip.request.as_ref().is_some_and(|t| t.blocking)
            }
            OverlayKind::Dialog => self.dialog.visible,
        }
    }
}

/// Rendering parameters the layers need from configuration.
#[derive(Debug, Clone, Copy)]
pub struct Metrics {
    pub viewport: Size,
    pub toast_top_offset: f32,
    pub max_tooltip_width: f32,
}

fn backdrop<'a, Message: 'a>() -> Element<'a, Message> {
    opaque(
        Container::new(iced::widget::Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::tint(opacity::BACKDROP)),
    )
}

/// Stacks `content` with every visible overlay.
///
/// `on_close` maps an overlay kind to the message that closes it. Toasts
/// have no close control.
pub fn view<'a, Message: Clone + 'a>(
    content: impl Into<Element<'a, Message>>,
    snapshot: &Snapshot,
    metrics: Metrics,
    on_close: impl Fn(OverlayKind) -> Message,
) -> Element<'a, Message> {
    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content);

    for kind in snapshot.paint_order() {
        let layer = match kind {
            OverlayKind::Dialog => dialog::view(&snapshot.dialog, on_close(kind)),
            OverlayKind::Tooltip => tooltip::view(
                &snapshot.tooltip,
                metrics.viewport,
                metrics.max_tooltip_width,
                on_close(kind),
            ),
            OverlayKind::Toast => toast::view(&snapshot.toast, metrics.toast_top_offset),
        };

        if let Some(layer) = layer {
            // Dialogs swallow input themselves.
            if kind != OverlayKind::Dialog && snapshot.is_blocking(kind) {
                stack = stack.push(backdrop());
            }
            stack = stack.push(layer);
        }
    }

    stack.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_order_puts_toast_on_top() {
        let snapshot = Snapshot {
            layers: LAYER_ORDER.to_vec(),
            ..Snapshot::default()
        };
        let order: Vec<_> = snapshot.paint_order().collect();
        assert_eq!(
            order,
            vec![OverlayKind::Dialog, OverlayKind::Tooltip, OverlayKind::Toast]
        );
    }

    #[test]
    fn paint_order_skips_host_layers() {
        let snapshot = Snapshot {
            layers: vec![OverlayKind::Tooltip, OverlayKind::Dialog],
            ..Snapshot::default()
        };
        let order: Vec<_> = snapshot.paint_order().collect();
        assert_eq!(order, vec![OverlayKind::Dialog, OverlayKind::Tooltip]);
    }

    #[test]
    fn blocking_requires_a_visible_blocking_request() {
        let mut snapshot = Snapshot {
            layers: LAYER_ORDER.to_vec(),
            ..Snapshot::default()
        };
        snapshot.toast.payload = Some(ToastRequest::new("wait").blocking(true));
        assert!(!snapshot.is_blocking(OverlayKind::Toast));

        snapshot.toast.visible = true;
        assert!(snapshot.is_blocking(OverlayKind::Toast));
        assert!(!snapshot.is_blocking(OverlayKind::Tooltip));
    }
}
