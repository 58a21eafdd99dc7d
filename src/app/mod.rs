// SPDX-License-Identifier: MPL-2.0
//! Demo application: the composition root for the overlay stack.
//!
//! The `App` owns the [`OverlayStack`] and a layout [`Scene`]. Producers in
//! `update` only ever talk to the stack through its relays; the controllers
//! are driven by the tick subscription, window resizes and close messages.

pub mod anchors;
mod message;
mod subscription;

pub use message::{Demo, Message};

use crate::config::{self, Config};
use crate::overlay::{
    DialogRequest, Document, ElementId, OverlayKind, OverlayStack, Relays, Scene, SharedClock, SystemClock,
    ToastRequest, TooltipRequest,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{layers, styles, tooltip};
use anchors::ANCHORS;
use iced::widget::{button, center, Column, Container, Stack, Text};
use iced::{window, Element, Length, Padding, Size, Subscription, Task, Theme};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Root iced application state.
pub struct App {
    config: Config,
    overlays: OverlayStack,
    /// Producer handles, as application code would hold them.
    relays: Relays,
    scene: Scene,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("overlays", &self.overlays)
            .field("scene", &self.scene)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let app = Self::with_clock(config, Rc::new(SystemClock));

        if let Some(warning) = warning {
            app.relays
                .toast
                .publish(ToastRequest::new(warning).duration(Duration::from_secs(6)));
        }
        (app, Task::none())
    }

    /// Builds a mounted application around `clock`.
    pub fn with_clock(config: Config, clock: SharedClock) -> Self {
        let overlays = OverlayStack::new(&config, clock);
        overlays.mount();
        let relays = overlays.relays().clone();

        let mut scene = Scene::default();
        anchors::layout(&mut scene, Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));

        Self {
            config,
            overlays,
            relays,
            scene,
        }
    }

    fn title(&self) -> String {
        String::from("Iced Overlays")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.config.runtime.tick_interval(),
            self.overlays.has_pending_work(),
        );
        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Demo(demo) => self.publish_demo(demo),
            Message::AnchorPressed(index) => self.toggle_tooltip(index),
            Message::Close(kind) => {
                let closed = match kind {
                    OverlayKind::Toast => self.overlays.toast().close(),
                    OverlayKind::Tooltip => self.overlays.tooltip().close(),
                    OverlayKind::Dialog => self.overlays.dialog().close(),
                };
                if closed.is_none() {
                    tracing::trace!(?kind, "close ignored");
                }
            }
            Message::Tick(_) => {
                // The previous tick's reveal has been painted by now.
                if let Err(err) = self.overlays.after_paint(&self.scene) {
                    tracing::warn!(%err, "tooltip layout failed");
                }
                for (kind, transition) in self.overlays.tick() {
                    tracing::trace!(?kind, ?transition, "overlay transition");
                }
            }
            Message::WindowResized(size) => {
                anchors::layout(&mut self.scene, size);
                if let Err(err) = self.overlays.relayout(&self.scene) {
                    tracing::warn!(%err, "tooltip relayout failed");
                }
            }
            Message::EscapePressed => self.relays.dialog.publish(DialogRequest::hide()),
        }
        Task::none()
    }

    fn publish_demo(&self, demo: Demo) {
        let relays = &self.relays;
        match demo {
            Demo::Toast => relays
                .toast
                .publish(ToastRequest::new("Saved").duration(Duration::from_secs(2))),
            Demo::TopToast => relays.toast.publish(
                ToastRequest::new("Heads up: this toast waited half a second")
                    .at_top(true)
                    .delay(Duration::from_millis(500))
                    .duration(Duration::from_secs(3)),
            ),
            Demo::BlockingToast => relays.toast.publish(
                ToastRequest::new("Working, please wait…")
                    .blocking(true)
                    .duration(Duration::from_secs(2)),
            ),
            Demo::HideToast => relays.toast.publish(ToastRequest::hide()),
            Demo::Dialog => relays.dialog.publish(DialogRequest::new(
                "Dialogs appear at once. Click the background or × to close.",
            )),
            Demo::WideDialog => relays.dialog.publish(
                DialogRequest::new("A wide dialog selected by its class name.").class_name("wide"),
            ),
            Demo::LockedDialog => relays.dialog.publish(
                DialogRequest::new("This dialog cannot be cancelled. Press Escape to hide it.")
                    .cancellable(false)
                    .class_name("warning"),
            ),
        }
    }

    fn toggle_tooltip(&mut self, index: usize) {
        let Some(anchor) = ANCHORS.get(index) else {
            tracing::warn!(index, "unknown anchor");
            return;
        };

        let current = self.overlays.tooltip().snapshot();
        let showing_this = current.visible
            && current
                .request
                .as_ref()
                .and_then(|request| request.anchor.as_ref())
                == Some(&anchor.id);
        if showing_this {
            self.relays.tooltip.publish(TooltipRequest::hide());
            return;
        }

        let request = anchor.request();
        let body = tooltip::estimate_body_size(&request.message, self.config.placement.max_body_width);
        self.scene.place(
            ElementId::TOOLTIP_BODY,
            iced::Rectangle::new(iced::Point::ORIGIN, body),
        );
        self.relays.tooltip.publish(request);
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Demo::ALL.into_iter().fold(
            Column::new()
                .spacing(spacing::XS)
                .align_x(iced::alignment::Horizontal::Center)
                .push(Text::new("Overlay demo").size(typography::TITLE_SM)),
            |column, demo| {
                column.push(
                    button(Text::new(demo.label()).size(typography::BODY))
                        .on_press(Message::Demo(demo))
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::button::primary),
                )
            },
        );

        let mut content = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(center(controls));

        let size = self.scene.viewport_size();
        for (index, anchor) in ANCHORS.iter().enumerate() {
            let bounds = anchor.bounds(size);
            let anchor_button = button(center(Text::new(anchor.label).size(typography::BODY)))
                .on_press(Message::AnchorPressed(index))
                .width(Length::Fixed(sizing::ANCHOR_WIDTH))
                .height(Length::Fixed(sizing::ANCHOR_HEIGHT))
                .style(styles::button::primary);
            content = content.push(
                Container::new(anchor_button)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(Padding::ZERO.top(bounds.y).left(bounds.x)),
            );
        }

        let metrics = layers::Metrics {
            viewport: size,
            toast_top_offset: self.config.toast.top_offset,
            max_tooltip_width: self.config.placement.max_body_width,
        };
        layers::view(
            content,
            &layers::Snapshot::capture(&self.overlays),
            metrics,
            Message::Close,
        )
    }

    /// The overlay stack, for inspection.
    #[must_use]
    pub fn overlays(&self) -> &OverlayStack {
        &self.overlays
    }
}
