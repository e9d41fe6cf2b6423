// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the collaborators a toast needs.
//!
//! The controller never talks to a windowing system, an animation engine or
//! an input stack directly. Hosts implement these traits; the [`overlay`]
//! module provides an Iced-backed host and tests provide fakes.
//!
//! # Available Ports
//!
//! - [`surface`]: top-level attach point, safe area and orientation
//! - [`animator`]: timed property transitions with a completion callback
//! - [`gesture`]: directional swipe subscriptions against a view
//! - [`scheduler`]: cancellable one-shot timers
//!
//! # Design Notes
//!
//! - Everything runs on the UI thread: ports are neither `Send` nor `Sync`
//!   and callbacks are plain `FnOnce`/`Fn` boxes
//! - Completion callbacks must fire exactly once, even when interrupted
//! - A cancelled [`TimerHandle`] must never run its callback
//!
//! [`overlay`]: crate::overlay

pub mod animator;
pub mod gesture;
pub mod scheduler;
pub mod surface;

pub use animator::Animator;
pub use gesture::{GestureSource, Subscription, SwipeHandler};
pub use scheduler::{Scheduler, TimerHandle, TimerState};
pub use surface::{Surface, SurfaceProvider};

/// One-shot callback handed to a collaborator.
pub type Callback = Box<dyn FnOnce()>;
