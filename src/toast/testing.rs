// SPDX-License-Identifier: MPL-2.0
//! Manually driven fake host for controller tests.
//!
//! Animations apply their update immediately and queue their completion;
//! timers and completions only run when a test asks for them, which makes
//! ordering races reproducible.

use super::controller::Host;
use super::view::ToastView;
use crate::domain::{ChildKind, ChildView, Insets, Orientation, SwipeDirection, ViewId};
use crate::port::{
    Animator, Callback, GestureSource, Scheduler, Subscription, Surface, SurfaceProvider,
    SwipeHandler, TimerHandle,
};
use iced::Size;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
pub struct FakeSurface {
    children: RefCell<Vec<Rc<ToastView>>>,
    bounds: Cell<Option<Size>>,
    insets: Cell<Insets>,
    pub layout_passes: Cell<usize>,
    pub detach_calls: Cell<usize>,
}

impl FakeSurface {
    pub fn with_bounds(bounds: Size, insets: Insets) -> Rc<Self> {
        let surface = Self::default();
        surface.bounds.set(Some(bounds));
        surface.insets.set(insets);
        Rc::new(surface)
    }

    pub fn views(&self) -> Vec<Rc<ToastView>> {
        self.children.borrow().clone()
    }

    pub fn set_bounds(&self, bounds: Size) {
        self.bounds.set(Some(bounds));
    }
}

impl Surface for FakeSurface {
    fn bounds(&self) -> Option<Size> {
        self.bounds.get()
    }

    fn safe_area(&self) -> Insets {
        self.insets.get()
    }

    fn attach(&self, view: Rc<ToastView>) {
        self.children.borrow_mut().push(view);
    }

    fn detach(&self, id: ViewId) -> bool {
        self.detach_calls.set(self.detach_calls.get() + 1);
        let mut children = self.children.borrow_mut();
        let before = children.len();
        children.retain(|v| v.id() != id);
        children.len() != before
    }

    fn children(&self) -> Vec<ChildView> {
        self.children
            .borrow()
            .iter()
            .map(|v| ChildView {
                id: v.id(),
                kind: ChildKind::Toast,
            })
            .collect()
    }

    fn layout_if_needed(&self) {
        self.layout_passes.set(self.layout_passes.get() + 1);
        let bounds = self.bounds_or(Size::new(300.0, 350.0));
        for view in self.children.borrow().iter() {
            view.layout_pass(bounds);
        }
    }
}

#[derive(Default)]
pub struct FakeProvider {
    surface: RefCell<Option<Rc<FakeSurface>>>,
    orientation: Cell<Orientation>,
}

impl FakeProvider {
    pub fn set_surface(&self, surface: Option<Rc<FakeSurface>>) {
        *self.surface.borrow_mut() = surface;
    }

    pub fn set_orientation(&self, orientation: Orientation) {
        self.orientation.set(orientation);
    }
}

impl SurfaceProvider for FakeProvider {
    fn current_surface(&self) -> Option<Rc<dyn Surface>> {
        self.surface
            .borrow()
            .clone()
            .map(|s| s as Rc<dyn Surface>)
    }

    fn current_orientation(&self) -> Orientation {
        self.orientation.get()
    }
}

#[derive(Default)]
pub struct ManualAnimator {
    pending: RefCell<VecDeque<Callback>>,
    pub durations: RefCell<Vec<Duration>>,
}

impl ManualAnimator {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Runs the oldest queued completion. Returns false if none was queued.
    pub fn complete_next(&self) -> bool {
        let next = self.pending.borrow_mut().pop_front();
        match next {
            Some(completion) => {
                completion();
                true
            }
            None => false,
        }
    }

    pub fn complete_all(&self) {
        while self.complete_next() {}
    }
}

impl Animator for ManualAnimator {
    fn animate(
        &self,
        _view: &Rc<ToastView>,
        duration: Duration,
        update: Callback,
        completion: Callback,
    ) {
        self.durations.borrow_mut().push(duration);
        update();
        self.pending.borrow_mut().push_back(completion);
    }
}

#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<Vec<(Duration, TimerHandle, Callback)>>,
}

impl ManualScheduler {
    pub fn scheduled(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(d, _, _)| *d).collect()
    }

    /// Fires every queued timer, skipping cancelled ones.
    pub fn fire_all(&self) -> usize {
        let queued: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        let mut fired = 0;
        for (_, handle, callback) in queued {
            if handle.fire() {
                callback();
                fired += 1;
            }
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, after: Duration, callback: Callback) -> TimerHandle {
        let handle = TimerHandle::new();
        self.pending
            .borrow_mut()
            .push((after, handle.clone(), callback));
        handle
    }
}

#[derive(Default)]
pub struct FakeGestures {
    subscriptions: RefCell<Vec<(Subscription, ViewId, Vec<SwipeDirection>, SwipeHandler)>>,
}

impl FakeGestures {
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    /// Delivers a swipe to every subscriber of `view` that listens for it.
    pub fn swipe(&self, view: ViewId, direction: SwipeDirection) -> usize {
        let handlers: Vec<SwipeHandler> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|(_, v, dirs, _)| *v == view && dirs.contains(&direction))
            .map(|(_, _, _, h)| Rc::clone(h))
            .collect();
        for handler in &handlers {
            handler(direction);
        }
        handlers.len()
    }

    /// Calls the handler directly, bypassing the direction filter.
    pub fn force_swipe(&self, view: ViewId, direction: SwipeDirection) {
        let handler = self
            .subscriptions
            .borrow()
            .iter()
            .find(|(_, v, _, _)| *v == view)
            .map(|(_, _, _, h)| Rc::clone(h));
        if let Some(handler) = handler {
            handler(direction);
        }
    }
}

impl GestureSource for FakeGestures {
    fn subscribe(
        &self,
        view: ViewId,
        directions: &[SwipeDirection],
        handler: SwipeHandler,
    ) -> Subscription {
        let subscription = Subscription::new();
        self.subscriptions
            .borrow_mut()
            .push((subscription, view, directions.to_vec(), handler));
        subscription
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.subscriptions
            .borrow_mut()
            .retain(|(s, _, _, _)| *s != subscription);
    }
}

/// A fake host with handles to every fake.
pub struct Harness {
    pub provider: Rc<FakeProvider>,
    pub surface: Rc<FakeSurface>,
    pub animator: Rc<ManualAnimator>,
    pub scheduler: Rc<ManualScheduler>,
    pub gestures: Rc<FakeGestures>,
}

impl Harness {
    pub fn new() -> Self {
        let provider = Rc::new(FakeProvider::default());
        let surface = FakeSurface::with_bounds(Size::new(400.0, 800.0), Insets::new(20.0, 34.0));
        provider.set_surface(Some(Rc::clone(&surface)));
        provider.set_orientation(Orientation::Portrait);
        Self {
            provider,
            surface,
            animator: Rc::new(ManualAnimator::default()),
            scheduler: Rc::new(ManualScheduler::default()),
            gestures: Rc::new(FakeGestures::default()),
        }
    }

    pub fn host(&self) -> Host {
        Host {
            surfaces: self.provider.clone(),
            animator: self.animator.clone(),
            gestures: self.gestures.clone(),
            scheduler: self.scheduler.clone(),
        }
    }
}
