// SPDX-License-Identifier: MPL-2.0
//! Overlay core: relays, timers, the visibility lifecycle and tooltip
//! placement.
//!
//! Everything here is single-threaded and renderer-agnostic. Producers publish
//! requests on a [`Relay`]; controllers own the resulting state; the host
//! drives time forward with `tick` and feeds layout through a [`Document`].

pub mod clock;
pub mod controller;
pub mod dialog;
pub mod geometry;
pub mod lifecycle;
pub mod placement;
pub mod relay;
pub mod stack;
pub mod timers;
pub mod toast;
pub mod tooltip;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use controller::{Controller, OverlayRequest};
pub use dialog::{DialogController, DialogRequest};
pub use geometry::{probe, Document, ElementId, Geometry, LayoutError, Scene};
pub use lifecycle::{HideReason, Lifecycle, Phase, Transition, VisibilityState};
pub use placement::{place, BodyMargins, HorizontalSide, OuterOffset, Placement, VerticalSide};
pub use relay::Relay;
pub use stack::{HostRelays, OverlayKind, OverlayStack, Relays, LAYER_ORDER};
pub use timers::{TimerRole, TimerSet};
pub use toast::{ToastController, ToastRequest};
pub use tooltip::{TooltipController, TooltipRequest, TooltipView};
