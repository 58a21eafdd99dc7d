// SPDX-License-Identifier: MPL-2.0
//! iced rendering of the overlay layers.
//!
//! Renderers only read owned snapshots of controller state; closing an
//! overlay is reported back as a message for the host to apply.

pub mod design_tokens;
pub mod dialog;
pub mod layers;
pub mod styles;
pub mod toast;
pub mod tooltip;
