// SPDX-License-Identifier: MPL-2.0
//! Window-backed surface and provider.

use crate::config::defaults::{FALLBACK_HEIGHT, FALLBACK_WIDTH};
use crate::domain::{ChildKind, ChildView, Insets, Orientation, ViewId};
use crate::port::{Surface, SurfaceProvider};
use crate::toast::ToastView;
use iced::{Point, Size};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// The toast layer of one window.
#[derive(Debug, Default)]
pub struct OverlaySurface {
    children: RefCell<Vec<Rc<ToastView>>>,
    bounds: Cell<Option<Size>>,
    safe_area: Cell<Insets>,
}

impl OverlaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bounds(&self, bounds: Size) {
        self.bounds.set(Some(bounds));
    }

    pub fn set_safe_area(&self, insets: Insets) {
        self.safe_area.set(insets);
    }

    /// Attached views, bottom-most first.
    pub fn views(&self) -> Vec<Rc<ToastView>> {
        self.children.borrow().clone()
    }

    /// Topmost view accepting input at `point`.
    pub fn view_at(&self, point: Point) -> Option<ViewId> {
        self.children
            .borrow()
            .iter()
            .rev()
            .find(|view| view.hit_test(point))
            .map(|view| view.id())
    }
}

impl Surface for OverlaySurface {
    fn bounds(&self) -> Option<Size> {
        self.bounds.get()
    }

    fn safe_area(&self) -> Insets {
        self.safe_area.get()
    }

    fn attach(&self, view: Rc<ToastView>) {
        self.children.borrow_mut().push(view);
    }

    fn detach(&self, id: ViewId) -> bool {
        let mut children = self.children.borrow_mut();
        let before = children.len();
        children.retain(|view| view.id() != id);
        children.len() != before
    }

    fn children(&self) -> Vec<ChildView> {
        self.children
            .borrow()
            .iter()
            .map(|view| ChildView {
                id: view.id(),
                kind: ChildKind::Toast,
            })
            .collect()
    }

    fn layout_if_needed(&self) {
        let bounds = self.bounds_or(Size::new(FALLBACK_WIDTH, FALLBACK_HEIGHT));
        // Clone so a view's layout pass never runs under the children borrow.
        for view in self.views() {
            view.layout_pass(bounds);
        }
    }
}

/// Hands out the window surface while the window is active.
#[derive(Debug)]
pub struct OverlayProvider {
    surface: Rc<OverlaySurface>,
    active: Cell<bool>,
    orientation: Cell<Orientation>,
}

impl OverlayProvider {
    pub fn new(surface: Rc<OverlaySurface>) -> Self {
        Self {
            surface,
            active: Cell::new(true),
            orientation: Cell::new(Orientation::Unknown),
        }
    }

    /// An inactive provider reports no surface, so `show` is a no-op.
    pub fn set_active(&self, active: bool) {
        self.active.set(active);
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn set_orientation(&self, orientation: Orientation) {
        self.orientation.set(orientation);
    }
}

impl SurfaceProvider for OverlayProvider {
    fn current_surface(&self) -> Option<Rc<dyn Surface>> {
        if self.active.get() {
            Some(Rc::clone(&self.surface) as Rc<dyn Surface>)
        } else {
            None
        }
    }

    fn current_orientation(&self) -> Orientation {
        self.orientation.get()
    }
}

/// Orientation implied by a window size. Square windows count as portrait.
#[must_use]
pub fn orientation_for(size: Size) -> Orientation {
    if size.width > size.height {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    }
}
