// SPDX-License-Identifier: MPL-2.0
//! Messages and startup flags of the demo application.

use crate::domain::ToastPosition;
use crate::overlay;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by [`App::update`](super::App).
#[derive(Debug, Clone)]
pub enum Message {
    Overlay(overlay::Message),
    Tick(Instant),
    /// Shows a toast; `None` uses the configured position.
    Show(Option<ToastPosition>),
    DismissAll,
    Resized(Size),
    /// The window gained (`true`) or lost focus.
    Focus(bool),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Default position override (`top` or `bottom`).
    pub position: Option<ToastPosition>,
    /// Default decay override, in seconds.
    pub decay_secs: Option<f32>,
    /// Message shown instead of the numbered placeholder.
    pub message: Option<String>,
}
