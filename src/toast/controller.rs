// SPDX-License-Identifier: MPL-2.0
//! Public entry point: shows toasts and answers presence queries.

use super::content::ToastRequest;
use super::instance::{DismissReason, ToastInstance};
use super::view::ToastView;
use crate::config::{Config, Timings, ToastConfig};
use crate::domain::{DecayInterval, LifecycleState, ViewId};
use crate::error::{Error, Result};
use crate::port::{Animator, GestureSource, Scheduler, SurfaceProvider};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// The collaborators a controller drives.
#[derive(Clone)]
pub struct Host {
    pub surfaces: Rc<dyn SurfaceProvider>,
    pub animator: Rc<dyn Animator>,
    pub gestures: Rc<dyn GestureSource>,
    pub scheduler: Rc<dyn Scheduler>,
}

/// Live instances, owned until they detach.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    live: RefCell<Vec<Rc<ToastInstance>>>,
}

impl Registry {
    fn insert(&self, instance: Rc<ToastInstance>) {
        self.live.borrow_mut().push(instance);
    }

    pub(crate) fn remove(&self, id: ViewId) {
        // Hold the removed Rc until the borrow is released.
        let removed = {
            let mut live = self.live.borrow_mut();
            let pos = live.iter().position(|i| i.view().id() == id);
            pos.map(|pos| live.remove(pos))
        };
        drop(removed);
    }

    fn snapshot(&self) -> Vec<Rc<ToastInstance>> {
        self.live.borrow().clone()
    }

    fn len(&self) -> usize {
        self.live.borrow().len()
    }
}

/// Weak handle to a shown toast.
///
/// The handle does not keep the toast alive: once removed, `state()` reports
/// [`LifecycleState::Removed`] and `dismiss()` does nothing.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    id: ViewId,
    instance: Weak<ToastInstance>,
}

impl ToastHandle {
    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn state(&self) -> LifecycleState {
        self.instance
            .upgrade()
            .map_or(LifecycleState::Removed, |i| i.lifecycle())
    }

    pub fn is_removed(&self) -> bool {
        self.state() == LifecycleState::Removed
    }

    /// Returns true while the toast's decay timer is pending.
    pub fn has_pending_timer(&self) -> bool {
        self.instance
            .upgrade()
            .and_then(|i| i.timer())
            .is_some_and(|t| t.is_pending())
    }

    /// Returns the attached view while the toast is alive.
    pub fn view(&self) -> Option<Rc<ToastView>> {
        self.instance.upgrade().map(|i| Rc::clone(i.view()))
    }

    /// Fades the toast out early, cancelling its decay timer.
    pub fn dismiss(&self) {
        if let Some(instance) = self.instance.upgrade() {
            instance.dismiss(DismissReason::Manual);
        }
    }

    /// Removes the toast immediately, skipping the exit animation.
    pub fn discard(&self) {
        if let Some(instance) = self.instance.upgrade() {
            instance.detach_and_discard();
        }
    }
}

/// Shows toasts on the host's current surface.
///
/// # Example
///
/// ```ignore
/// let controller = ToastController::new(host);
/// controller.show(ToastRequest::new("Saved"));
/// assert!(controller.is_currently_presenting());
/// ```
pub struct ToastController {
    host: Host,
    defaults: ToastConfig,
    timings: Timings,
    registry: Rc<Registry>,
}

impl ToastController {
    pub fn new(host: Host) -> Self {
        Self::with_config(host, &Config::default())
    }

    pub fn with_config(host: Host, config: &Config) -> Self {
        Self {
            host,
            defaults: config.toast.clone(),
            timings: config.animation.timings(),
            registry: Rc::new(Registry::default()),
        }
    }

    /// Shows a toast. Fire and forget: failures are logged, never returned.
    pub fn show(&self, request: ToastRequest) {
        if let Err(err) = self.present(request) {
            if err.is_silent() {
                tracing::debug!(error = %err, "toast not shown");
            } else {
                tracing::warn!(error = %err, "toast not shown");
            }
        }
    }

    /// Shows a toast and returns a handle to it.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDecay`] if the request asks for a zero decay
    /// - [`Error::NoSurfaceAvailable`] if the host has no surface; nothing
    ///   is created in that case
    pub fn present(&self, request: ToastRequest) -> Result<ToastHandle> {
        let decay = match request.requested_decay() {
            Some(duration) => DecayInterval::new(duration)?,
            None => self.defaults.decay(),
        };
        let surface = self
            .host
            .surfaces
            .current_surface()
            .ok_or(Error::NoSurfaceAvailable)?;
        let orientation = self.host.surfaces.current_orientation();

        let view = ToastView::new(request.into_content(self.defaults.position()));
        let instance = ToastInstance::new(
            view,
            decay,
            self.timings,
            self.host.clone(),
            Rc::downgrade(&self.registry),
        );
        self.registry.insert(Rc::clone(&instance));

        let handle = ToastHandle {
            id: instance.view().id(),
            instance: Rc::downgrade(&instance),
        };
        instance.present(surface, orientation);
        Ok(handle)
    }

    /// Returns true if the current surface has a toast attached.
    ///
    /// Advisory: the controller itself never refuses to stack toasts.
    pub fn is_currently_presenting(&self) -> bool {
        self.host
            .surfaces
            .current_surface()
            .is_some_and(|surface| surface.has_toast_child())
    }

    /// Number of toasts shown by this controller and not yet removed.
    pub fn live_count(&self) -> usize {
        self.registry.len()
    }

    /// Fades out every live toast.
    pub fn dismiss_all(&self) {
        for instance in self.registry.snapshot() {
            instance.dismiss(DismissReason::Manual);
        }
    }

    /// Recomputes toast widths from the current orientation and lays the
    /// current surface out again.
    pub fn relayout_for_orientation(&self) {
        let orientation = self.host.surfaces.current_orientation();
        for instance in self.registry.snapshot() {
            instance.update_width(orientation);
        }
        if let Some(surface) = self.host.surfaces.current_surface() {
            surface.layout_if_needed();
        }
    }
}

impl std::fmt::Debug for ToastController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastController")
            .field("defaults", &self.defaults)
            .field("timings", &self.timings)
            .field("live", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl Drop for ToastController {
    fn drop(&mut self) {
        for instance in self.registry.snapshot() {
            instance.detach_and_discard();
        }
    }
}
