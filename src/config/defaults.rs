// SPDX-License-Identifier: MPL-2.0
//! Default values for every configuration constant.
//!
//! # Categories
//!
//! - **Placement**: tooltip arrow and margin geometry
//! - **Toast**: toast positioning
//! - **Runtime**: how often pending overlay timers are polled

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Half-width of the tooltip arrow, in logical pixels.
pub const DEFAULT_ARROW_SIZE: f32 = 8.0;

/// Widest a tooltip body is allowed to grow.
pub const DEFAULT_MAX_BODY_WIDTH: f32 = 350.0;

/// Minimum distance kept between a clamped tooltip body and the viewport edge.
pub const DEFAULT_SIDE_MARGIN: f32 = 8.0;

/// Fixed visual inset of the arrow inside the body opening.
pub const DEFAULT_ARROW_INSET: f32 = 15.0;

/// Gap between the anchor and the tooltip container.
pub const DEFAULT_ANCHOR_GAP: f32 = 5.0;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Distance from the top edge for toasts shown at the top.
pub const DEFAULT_TOAST_TOP_OFFSET: f32 = 4.0;

// ==========================================================================
// Runtime Defaults
// ==========================================================================

/// Poll interval for pending overlay timers (roughly one frame).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;

/// Minimum poll interval.
pub const MIN_TICK_INTERVAL_MS: u64 = 1;

/// Maximum poll interval.
pub const MAX_TICK_INTERVAL_MS: u64 = 250;
