// SPDX-License-Identifier: MPL-2.0
//! Surface port: the top-level drawing region toasts attach to.

use crate::domain::{ChildKind, ChildView, Insets, Orientation, ViewId};
use crate::toast::ToastView;
use iced::Size;
use std::rc::Rc;

/// Supplies the currently active surface and device orientation.
pub trait SurfaceProvider {
    /// Returns the active top-level surface, if any.
    ///
    /// `None` is a valid state (no window yet, app in background) and makes
    /// `show` a silent no-op.
    fn current_surface(&self) -> Option<Rc<dyn Surface>>;

    /// Returns the current device orientation.
    fn current_orientation(&self) -> Orientation;
}

/// A top-level drawing region.
pub trait Surface {
    /// Surface bounds, or `None` while they are not known yet.
    fn bounds(&self) -> Option<Size>;

    /// Safe-area insets.
    fn safe_area(&self) -> Insets;

    /// Adds a view on top of the surface's children.
    fn attach(&self, view: Rc<ToastView>);

    /// Removes a view. Returns `false` if it was not attached.
    fn detach(&self, id: ViewId) -> bool;

    /// Direct children, bottom-most first.
    fn children(&self) -> Vec<ChildView>;

    /// Runs a synchronous layout pass over the attached views.
    fn layout_if_needed(&self);

    /// Returns true if any direct child is a toast.
    fn has_toast_child(&self) -> bool {
        self.children()
            .iter()
            .any(|child| child.kind == ChildKind::Toast)
    }

    /// Returns the bounds, or the fallback used before the first layout.
    fn bounds_or(&self, fallback: Size) -> Size {
        self.bounds().unwrap_or(fallback)
    }
}
