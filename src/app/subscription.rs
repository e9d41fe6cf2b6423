// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Frame interval driving animations and timers.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window resize and focus events.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
        event::Event::Window(window::Event::Focused) => Some(Message::Focus(true)),
        event::Event::Window(window::Event::Unfocused) => Some(Message::Focus(false)),
        _ => None,
    })
}

/// Creates the frame tick, only while the overlay has work to do.
pub fn create_tick_subscription(busy: bool) -> Subscription<Message> {
    if busy {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
