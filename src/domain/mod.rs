// SPDX-License-Identifier: MPL-2.0
//! Domain types shared by the toast controller, the ports and the hosts.
//!
//! These types carry no behavior tied to a particular toolkit; geometry
//! reuses `iced`'s plain value types (`Size`, `Point`, `Rectangle`).

mod newtypes;
mod types;

pub use newtypes::{DecayInterval, ViewId};
pub use types::{
    ChildKind, ChildView, Insets, LifecycleState, Orientation, SwipeDirection, ToastPosition,
};
