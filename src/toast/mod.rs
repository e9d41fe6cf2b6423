// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! A toast is a transient banner anchored to the top or bottom edge of the
//! current surface. It fades in, stays for its decay interval, then fades
//! out; a swipe or a manual dismissal ends it early.
//!
//! # Components
//!
//! - [`controller`] - `ToastController`, the public entry point
//! - [`content`] - `ToastRequest` builder and the immutable `ToastContent`
//! - [`layout`] - constraint set and its resolution into a frame
//! - [`view`] - `ToastView`, the attachable view with model and presentation
//!
//! # Lifecycle
//!
//! ```text
//! Created -> Presenting -> Visible -> Dismissing -> Removed
//!                 \___________________/
//!                  swipe / manual dismissal
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::toast::{ToastController, ToastRequest};
//! use iced_toast::domain::ToastPosition;
//!
//! let controller = ToastController::new(host);
//! controller.show(ToastRequest::new("Saved").position(ToastPosition::Bottom));
//! ```

pub mod content;
pub mod controller;
mod instance;
pub mod layout;
pub mod view;

#[cfg(test)]
mod testing;

pub use content::{ToastContent, ToastFont, ToastIcon, ToastRequest};
pub use controller::{Host, ToastController, ToastHandle};
pub use layout::ToastLayout;
pub use view::{Presentation, ToastView};
