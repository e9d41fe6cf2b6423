// SPDX-License-Identifier: MPL-2.0
//! The attachable toast view.
//!
//! A view has two sets of visual properties:
//!
//! - the **model** (alpha, constraints, resolved frame) written by the
//!   controller and by layout passes
//! - the **presentation** overrides written by an animator while a
//!   transition is in flight
//!
//! Renderers read [`ToastView::presentation`], which prefers the overrides.

use super::content::ToastContent;
use super::layout::ToastLayout;
use crate::domain::ViewId;
use iced::{Point, Rectangle, Size};
use std::cell::{Cell, RefCell};

/// Identifies the animation that owns a presentation override.
pub type AnimationId = u64;

/// What a renderer should draw right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub alpha: f32,
    pub frame: Rectangle,
}

#[derive(Debug, Clone, Copy, Default)]
struct Overrides {
    alpha: Option<(AnimationId, f32)>,
    frame: Option<(AnimationId, Rectangle)>,
}

#[derive(Debug)]
struct Model {
    alpha: f32,
    interaction_enabled: bool,
    layout: ToastLayout,
    frame: Rectangle,
}

/// A toast view as attached to a surface.
#[derive(Debug)]
pub struct ToastView {
    id: ViewId,
    content: ToastContent,
    model: RefCell<Model>,
    overrides: Cell<Overrides>,
}

impl ToastView {
    pub fn new(content: ToastContent) -> Self {
        Self {
            id: ViewId::new(),
            content,
            model: RefCell::new(Model {
                alpha: 1.0,
                interaction_enabled: false,
                layout: ToastLayout::default(),
                frame: Rectangle::new(Point::ORIGIN, Size::ZERO),
            }),
            overrides: Cell::new(Overrides::default()),
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn content(&self) -> &ToastContent {
        &self.content
    }

    pub fn alpha(&self) -> f32 {
        self.model.borrow().alpha
    }

    pub fn set_alpha(&self, alpha: f32) {
        self.model.borrow_mut().alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn is_interaction_enabled(&self) -> bool {
        self.model.borrow().interaction_enabled
    }

    pub fn set_interaction_enabled(&self, enabled: bool) {
        self.model.borrow_mut().interaction_enabled = enabled;
    }

    /// Model frame as of the last layout pass.
    pub fn frame(&self) -> Rectangle {
        self.model.borrow().frame
    }

    /// Returns a copy of the constraint set.
    pub fn layout(&self) -> ToastLayout {
        self.model.borrow().layout.clone()
    }

    /// Mutates the constraint set. Takes effect on the next layout pass.
    pub fn with_layout<R>(&self, f: impl FnOnce(&mut ToastLayout) -> R) -> R {
        f(&mut self.model.borrow_mut().layout)
    }

    /// Resolves the constraint set against `bounds` into the model frame.
    ///
    /// Keeps the previous frame when no vertical constraint is active.
    pub fn layout_pass(&self, bounds: Size) {
        let mut model = self.model.borrow_mut();
        let content_height = self.content.estimated_height(model.layout.width);
        if model.layout.has_vertical_conflict() {
            tracing::debug!(view = self.id.value(), "shown and hidden constraints both active");
        }
        if let Some(frame) = model.layout.resolve(bounds, content_height) {
            model.frame = frame;
        }
    }

    /// Model values, ignoring in-flight animations.
    pub fn model_presentation(&self) -> Presentation {
        let model = self.model.borrow();
        Presentation {
            alpha: model.alpha,
            frame: model.frame,
        }
    }

    /// Values to draw: animation overrides first, model otherwise.
    pub fn presentation(&self) -> Presentation {
        let model = self.model_presentation();
        let overrides = self.overrides.get();
        Presentation {
            alpha: overrides.alpha.map_or(model.alpha, |(_, a)| a),
            frame: overrides.frame.map_or(model.frame, |(_, f)| f),
        }
    }

    pub fn set_alpha_override(&self, owner: AnimationId, alpha: f32) {
        let mut overrides = self.overrides.get();
        overrides.alpha = Some((owner, alpha));
        self.overrides.set(overrides);
    }

    pub fn set_frame_override(&self, owner: AnimationId, frame: Rectangle) {
        let mut overrides = self.overrides.get();
        overrides.frame = Some((owner, frame));
        self.overrides.set(overrides);
    }

    /// Drops the overrides still owned by `owner`. Overrides taken over by a
    /// later animation are left alone.
    pub fn clear_overrides(&self, owner: AnimationId) {
        let mut overrides = self.overrides.get();
        if overrides.alpha.is_some_and(|(id, _)| id == owner) {
            overrides.alpha = None;
        }
        if overrides.frame.is_some_and(|(id, _)| id == owner) {
            overrides.frame = None;
        }
        self.overrides.set(overrides);
    }

    /// Returns true if `point` (surface coordinates) hits the drawn toast and
    /// the toast accepts input.
    pub fn hit_test(&self, point: Point) -> bool {
        self.is_interaction_enabled() && self.presentation().frame.contains(point)
    }
}
