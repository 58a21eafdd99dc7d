// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the demo application.

use crate::overlay::OverlayKind;
use iced::Size;
use std::time::Instant;

/// Canned publishes offered by the demo's control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Toast,
    TopToast,
    BlockingToast,
    HideToast,
    Dialog,
    WideDialog,
    LockedDialog,
}

impl Demo {
    pub const ALL: [Demo; 7] = [
        Demo::Toast,
        Demo::TopToast,
        Demo::BlockingToast,
        Demo::HideToast,
        Demo::Dialog,
        Demo::WideDialog,
        Demo::LockedDialog,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Demo::Toast => "Toast",
            Demo::TopToast => "Delayed toast at top",
            Demo::BlockingToast => "Blocking toast",
            Demo::HideToast => "Hide toast",
            Demo::Dialog => "Dialog",
            Demo::WideDialog => "Wide dialog",
            Demo::LockedDialog => "Locked dialog",
        }
    }
}

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Demo(Demo),
    /// An anchor button was pressed; the index is into `anchors::ANCHORS`.
    AnchorPressed(usize),
    /// The user closed an overlay (close button or dialog background).
    Close(OverlayKind),
    Tick(Instant), // Periodic tick for overlay timers and post-paint layout
    WindowResized(Size),
    EscapePressed,
}
