// SPDX-License-Identifier: MPL-2.0
//! Plain enums and value types describing toasts and their host.

use super::ViewId;
use serde::{Deserialize, Serialize};

/// Edge of the surface a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPosition {
    #[default]
    Top,
    Bottom,
}

impl ToastPosition {
    /// Returns the swipe direction that pushes a toast back off its edge.
    #[must_use]
    pub fn exit_direction(self) -> SwipeDirection {
        match self {
            ToastPosition::Top => SwipeDirection::Up,
            ToastPosition::Bottom => SwipeDirection::Down,
        }
    }

    /// Returns every swipe direction a toast at this position reacts to.
    #[must_use]
    pub fn enabled_swipes(self) -> [SwipeDirection; 3] {
        [
            SwipeDirection::Left,
            SwipeDirection::Right,
            self.exit_direction(),
        ]
    }
}

impl std::str::FromStr for ToastPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(ToastPosition::Top),
            "bottom" => Ok(ToastPosition::Bottom),
            other => Err(format!("unknown toast position: {other}")),
        }
    }
}

/// Device orientation as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Landscape,
    Portrait,
    #[default]
    Unknown,
}

/// Direction of a completed swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Safe-area insets of a surface (regions obscured by system chrome).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    #[must_use]
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }
}

/// Lifecycle of a single toast instance. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LifecycleState {
    #[default]
    Created,
    Presenting,
    Visible,
    Dismissing,
    Removed,
}

impl LifecycleState {
    /// Returns true while a dismissal trigger may still start an exit.
    #[must_use]
    pub fn accepts_dismissal(self) -> bool {
        matches!(self, LifecycleState::Presenting | LifecycleState::Visible)
    }
}

/// What kind of view a surface child is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Toast,
    Other,
}

/// A direct child of a surface, as reported for presence queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildView {
    pub id: ViewId,
    pub kind: ChildKind,
}
