// SPDX-License-Identifier: MPL-2.0
//! Constraint set of a toast and its resolution into a frame.
//!
//! A toast is sized by a width constraint and a minimum height, centered
//! horizontally on the surface (offset by the center-x constant), and placed
//! vertically by one of two edge constraints:
//!
//! - **shown**: the on-screen resting position
//! - **hidden**: the off-screen staging position
//!
//! When both vertical constraints are active at once, the most recently
//! activated one decides the resolved position.

use crate::config::defaults::{
    BOTTOM_STAGING_OFFSET, FALLBACK_HEIGHT, FALLBACK_WIDTH, HORIZONTAL_MARGIN, MIN_HEIGHT,
    TOP_GAP,
};
use crate::domain::{Insets, Orientation, ToastPosition};
use iced::{Rectangle, Size};

/// Horizontal edge of a toast or of its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Pins one toast edge to a surface edge plus a constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeConstraint {
    pub toast_edge: Edge,
    pub surface_edge: Edge,
    pub constant: f32,
    active: bool,
    activated_at: u64,
}

impl EdgeConstraint {
    #[must_use]
    pub fn new(toast_edge: Edge, surface_edge: Edge, constant: f32) -> Self {
        Self {
            toast_edge,
            surface_edge,
            constant,
            active: false,
            activated_at: 0,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the y coordinate of the toast's top edge this constraint asks for.
    #[must_use]
    pub fn resolve_top(&self, surface_height: f32, toast_height: f32) -> f32 {
        let surface_y = match self.surface_edge {
            Edge::Top => 0.0,
            Edge::Bottom => surface_height,
        };
        let target = surface_y + self.constant;
        match self.toast_edge {
            Edge::Top => target,
            Edge::Bottom => target - toast_height,
        }
    }
}

/// Builds the (shown, hidden) vertical constraints for a position.
#[must_use]
pub fn vertical_constraints(
    position: ToastPosition,
    safe_area: Insets,
) -> (EdgeConstraint, EdgeConstraint) {
    match position {
        ToastPosition::Top => (
            EdgeConstraint::new(Edge::Top, Edge::Top, safe_area.top + TOP_GAP),
            EdgeConstraint::new(Edge::Bottom, Edge::Top, 0.0),
        ),
        ToastPosition::Bottom => (
            EdgeConstraint::new(Edge::Bottom, Edge::Bottom, -safe_area.bottom),
            EdgeConstraint::new(Edge::Top, Edge::Bottom, BOTTOM_STAGING_OFFSET),
        ),
    }
}

/// Computes the toast width for the given surface bounds and orientation.
///
/// In landscape the surface's cross axis (its height) is used.
#[must_use]
pub fn toast_width(bounds: Option<Size>, orientation: Orientation) -> f32 {
    let span = match orientation {
        Orientation::Landscape => bounds.map_or(FALLBACK_HEIGHT, |b| b.height),
        Orientation::Portrait | Orientation::Unknown => bounds.map_or(FALLBACK_WIDTH, |b| b.width),
    };
    (span - HORIZONTAL_MARGIN).max(0.0)
}

/// The full constraint set of one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastLayout {
    pub width: f32,
    pub min_height: f32,
    /// Constant of the center-x constraint (offset from the surface center).
    pub center_x: f32,
    shown: Option<EdgeConstraint>,
    hidden: Option<EdgeConstraint>,
    activations: u64,
    released: bool,
}

impl Default for ToastLayout {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ToastLayout {
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            width,
            min_height: MIN_HEIGHT,
            center_x: 0.0,
            shown: None,
            hidden: None,
            activations: 0,
            released: false,
        }
    }

    /// Installs inactive shown/hidden constraints.
    pub fn install_vertical(&mut self, shown: EdgeConstraint, hidden: EdgeConstraint) {
        self.shown = Some(EdgeConstraint {
            active: false,
            ..shown
        });
        self.hidden = Some(EdgeConstraint {
            active: false,
            ..hidden
        });
    }

    pub fn set_shown_active(&mut self, active: bool) {
        self.activations += 1;
        let stamp = self.activations;
        if let Some(c) = self.shown.as_mut() {
            set_active(c, active, stamp);
        }
    }

    pub fn set_hidden_active(&mut self, active: bool) {
        self.activations += 1;
        let stamp = self.activations;
        if let Some(c) = self.hidden.as_mut() {
            set_active(c, active, stamp);
        }
    }

    #[must_use]
    pub fn shown(&self) -> Option<&EdgeConstraint> {
        self.shown.as_ref()
    }

    #[must_use]
    pub fn hidden(&self) -> Option<&EdgeConstraint> {
        self.hidden.as_ref()
    }

    #[must_use]
    pub fn is_shown_active(&self) -> bool {
        self.shown.is_some_and(|c| c.active)
    }

    #[must_use]
    pub fn is_hidden_active(&self) -> bool {
        self.hidden.is_some_and(|c| c.active)
    }

    /// Returns true when both vertical constraints are active.
    #[must_use]
    pub fn has_vertical_conflict(&self) -> bool {
        self.is_shown_active() && self.is_hidden_active()
    }

    /// Drops every constraint. A released layout no longer resolves.
    pub fn release(&mut self) {
        self.shown = None;
        self.hidden = None;
        self.released = true;
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Resolves the frame inside a surface of size `bounds`.
    ///
    /// `content_height` is the height the content asks for; the toast never
    /// gets shorter than `min_height`. Returns `None` if no vertical
    /// constraint is active, in which case the previous frame should be kept.
    #[must_use]
    pub fn resolve(&self, bounds: Size, content_height: f32) -> Option<Rectangle> {
        if self.released {
            return None;
        }
        let vertical = [self.shown, self.hidden]
            .into_iter()
            .flatten()
            .filter(|c| c.active)
            .max_by_key(|c| c.activated_at)?;

        let height = content_height.max(self.min_height);
        let x = bounds.width / 2.0 + self.center_x - self.width / 2.0;
        let y = vertical.resolve_top(bounds.height, height);
        Some(Rectangle {
            x,
            y,
            width: self.width,
            height,
        })
    }
}

fn set_active(constraint: &mut EdgeConstraint, active: bool, stamp: u64) {
    if active && !constraint.active {
        constraint.activated_at = stamp;
    }
    constraint.active = active;
}
