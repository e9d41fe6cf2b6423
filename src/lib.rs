// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows transient, auto-dismissing toast banners.
//!
//! A toast is anchored to the top or bottom edge of the current surface,
//! fades in, waits for its decay interval and fades out again. Swiping it
//! sideways or back off its edge dismisses it early.
//!
//! The [`toast`] module holds the lifecycle logic and talks to its host only
//! through the traits in [`port`]. The [`overlay`] module implements those
//! traits on top of an Iced window, and [`app`] is a small demo built on it.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod overlay;
pub mod port;
pub mod toast;

#[cfg(test)]
pub(crate) mod test_utils;
