// SPDX-License-Identifier: MPL-2.0
//! Widget styles for the overlay layers.

pub mod button;
pub mod container;
pub mod tooltip;
