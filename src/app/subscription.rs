// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window resizes and an unhandled Escape key.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::EscapePressed),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Periodic tick while any overlay waits on a timer or a paint.
pub fn create_tick_subscription(interval: Duration, has_pending_work: bool) -> Subscription<Message> {
    if has_pending_work {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
