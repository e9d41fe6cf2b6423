// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting toasts in an Iced window.
//!
//! The `App` owns one [`Overlay`] stacked over a small control panel and a
//! [`ToastController`] wired to it. Frame ticks drive the overlay's
//! animations and timers; resize and focus events keep its surface current.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::ToastPosition;
use crate::overlay::Overlay;
use crate::toast::{ToastController, ToastRequest};
use iced::widget::{button, column, container, text, Stack};
use iced::{window, Element, Length, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Root Iced application state.
pub struct App {
    overlay: Overlay,
    controller: ToastController,
    message: Option<String>,
    shown: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("overlay", &self.overlay)
            .field("controller", &self.controller)
            .field("shown", &self.shown)
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

/// Loads the stored configuration and applies CLI overrides on top.
fn resolve_config(flags: &Flags) -> Config {
    let mut config = config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to load toast config, using defaults");
        Config::default()
    });
    apply_flags(&mut config, flags);
    config
}

fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(position) = flags.position {
        config.toast.position = Some(position);
    }
    if let Some(decay) = flags.decay_secs {
        config.toast.decay_secs = Some(decay);
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`, so the flags are taken out exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = resolve_config(&flags);
        (Self::with_config(flags, &config, Instant::now()), Task::none())
    }

    fn with_config(flags: Flags, config: &Config, now: Instant) -> Self {
        let overlay = Overlay::new(now);
        overlay.resize(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));
        let controller = ToastController::with_config(overlay.host(), config);
        tracing::debug!(?config, "toast demo started");
        Self {
            overlay,
            controller,
            message: flags.message,
            shown: 0,
        }
    }

    fn title(&self) -> String {
        String::from("Iced Toast")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_tick_subscription(self.overlay.is_busy()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Overlay(message) => {
                self.overlay.handle(message);
            }
            Message::Tick(now) => self.overlay.tick(now),
            Message::Show(position) => self.show(position, Instant::now()),
            Message::DismissAll => self.controller.dismiss_all(),
            Message::Resized(size) => {
                self.overlay.resize(size);
                self.controller.relayout_for_orientation();
            }
            Message::Focus(focused) => self.overlay.set_active(focused),
        }
        Task::none()
    }

    fn show(&mut self, position: Option<ToastPosition>, now: Instant) {
        // The tick stops while idle, so catch the clock up before animating.
        self.overlay.tick(now);
        self.shown += 1;
        let text = self
            .message
            .clone()
            .unwrap_or_else(|| format!("Toast #{}", self.shown));
        let mut request = ToastRequest::new(text);
        if let Some(position) = position {
            request = request.position(position);
        }
        self.controller.show(request);
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = column![
            text("Toast demo").size(24),
            button("Show").on_press(Message::Show(None)),
            button("Show at top").on_press(Message::Show(Some(ToastPosition::Top))),
            button("Show at bottom").on_press(Message::Show(Some(ToastPosition::Bottom))),
            button("Dismiss all").on_press(Message::DismissAll),
            text(format!("Live toasts: {}", self.controller.live_count())).size(14),
        ]
        .spacing(12);

        Stack::new()
            .push(container(controls).center(Length::Fill))
            .push(self.overlay.view().map(Message::Overlay))
            .into()
    }
}
