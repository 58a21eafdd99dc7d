// SPDX-License-Identifier: MPL-2.0
//! `iced_overlays` provides toast, tooltip and dialog overlays for iced
//! applications.
//!
//! Application code triggers overlays by publishing requests on a
//! [`overlay::Relay`], without holding a reference to the rendered overlay.
//! Each overlay kind has a controller that turns requests into visibility
//! state, including delayed show, auto-hide and (for tooltips) placement
//! next to an anchor element.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod overlay;
pub mod ui;
