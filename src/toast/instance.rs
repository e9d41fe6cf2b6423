// SPDX-License-Identifier: MPL-2.0
//! Lifecycle of a single toast.
//!
//! Every exit path (decay, swipe, manual dismissal) goes through
//! [`ToastInstance::begin_dismissal`] and ends in
//! [`ToastInstance::detach_and_discard`], which is idempotent.
//!
//! Callbacks handed to collaborators hold `Weak` references only; the
//! controller's registry owns the instance until it detaches.

use super::controller::{Host, Registry};
use super::layout::{toast_width, vertical_constraints};
use super::view::ToastView;
use crate::config::Timings;
use crate::domain::{DecayInterval, LifecycleState, Orientation, SwipeDirection};
use crate::port::{Subscription, Surface, SwipeHandler, TimerHandle};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Why a toast started leaving the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Decay,
    Swipe(SwipeDirection),
    Manual,
}

#[derive(Default)]
struct InstanceState {
    lifecycle: LifecycleState,
    surface: Option<Rc<dyn Surface>>,
    timer: Option<TimerHandle>,
    subscription: Option<Subscription>,
}

pub(crate) struct ToastInstance {
    view: Rc<ToastView>,
    decay: DecayInterval,
    timings: Timings,
    host: Host,
    registry: Weak<Registry>,
    state: RefCell<InstanceState>,
}

impl ToastInstance {
    pub(crate) fn new(
        view: ToastView,
        decay: DecayInterval,
        timings: Timings,
        host: Host,
        registry: Weak<Registry>,
    ) -> Rc<Self> {
        Rc::new(Self {
            view: Rc::new(view),
            decay,
            timings,
            host,
            registry,
            state: RefCell::new(InstanceState::default()),
        })
    }

    pub(crate) fn view(&self) -> &Rc<ToastView> {
        &self.view
    }

    pub(crate) fn lifecycle(&self) -> LifecycleState {
        self.state.borrow().lifecycle
    }

    pub(crate) fn timer(&self) -> Option<TimerHandle> {
        self.state.borrow().timer.clone()
    }

    fn surface(&self) -> Option<Rc<dyn Surface>> {
        self.state.borrow().surface.clone()
    }

    /// Attaches the view, installs its constraints and starts the entrance.
    pub(crate) fn present(self: &Rc<Self>, surface: Rc<dyn Surface>, orientation: Orientation) {
        let position = self.view.content().position;
        let width = toast_width(surface.bounds(), orientation);

        self.view.set_alpha(0.0);
        self.view.set_interaction_enabled(true);

        let weak = Rc::downgrade(self);
        let handler: SwipeHandler = Rc::new(move |direction| {
            if let Some(instance) = weak.upgrade() {
                instance.on_swipe(direction);
            }
        });
        let subscription =
            self.host
                .gestures
                .subscribe(self.view.id(), &position.enabled_swipes(), handler);

        {
            let mut state = self.state.borrow_mut();
            state.lifecycle = LifecycleState::Presenting;
            state.surface = Some(Rc::clone(&surface));
            state.subscription = Some(subscription);
        }
        surface.attach(Rc::clone(&self.view));

        let (shown, hidden) = vertical_constraints(position, surface.safe_area());
        self.view.with_layout(|layout| {
            layout.width = width;
            layout.install_vertical(shown, hidden);
            layout.set_shown_active(true);
            layout.set_hidden_active(true);
        });
        surface.layout_if_needed();
        self.view.with_layout(|layout| layout.set_hidden_active(false));

        tracing::debug!(
            view = self.view.id().value(),
            ?position,
            width,
            "toast presenting"
        );

        let view = Rc::clone(&self.view);
        let weak = Rc::downgrade(self);
        self.host.animator.animate(
            &self.view,
            self.timings.fade_in,
            Box::new(move || view.set_alpha(1.0)),
            Box::new(move || {
                if let Some(instance) = weak.upgrade() {
                    instance.on_entrance_complete();
                }
            }),
        );
        self.arm_decay_timer();
    }

    /// Schedules the decay callback. The timer runs alongside the entrance.
    fn arm_decay_timer(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let timer = self.host.scheduler.schedule(
            self.decay.as_duration(),
            Box::new(move || {
                if let Some(instance) = weak.upgrade() {
                    instance.dismiss(DismissReason::Decay);
                }
            }),
        );
        let armed = {
            let mut state = self.state.borrow_mut();
            if state.lifecycle.accepts_dismissal() {
                state.timer = Some(timer.clone());
                true
            } else {
                false
            }
        };
        if !armed {
            timer.cancel();
        }
        tracing::trace!(
            view = self.view.id().value(),
            decay = ?self.decay.as_duration(),
            armed,
            "decay timer"
        );
    }

    fn on_entrance_complete(&self) {
        if let Some(surface) = self.surface() {
            surface.layout_if_needed();
        }
        let mut state = self.state.borrow_mut();
        if state.lifecycle == LifecycleState::Presenting {
            state.lifecycle = LifecycleState::Visible;
            tracing::debug!(view = self.view.id().value(), "toast visible");
        }
    }

    /// Moves to `Dismissing`. Returns `false` if an exit already started.
    ///
    /// The decay timer is cancelled for every reason except the timer itself.
    fn begin_dismissal(&self, reason: DismissReason) -> bool {
        let timer = {
            let mut state = self.state.borrow_mut();
            if !state.lifecycle.accepts_dismissal() {
                tracing::trace!(
                    view = self.view.id().value(),
                    ?reason,
                    lifecycle = ?state.lifecycle,
                    "dismissal ignored"
                );
                return false;
            }
            state.lifecycle = LifecycleState::Dismissing;
            state.timer.take()
        };
        if let Some(timer) = timer {
            if reason != DismissReason::Decay {
                timer.cancel();
            }
        }
        tracing::debug!(view = self.view.id().value(), ?reason, "toast dismissing");
        true
    }

    /// Starts the exit animation for `reason`.
    pub(crate) fn dismiss(self: &Rc<Self>, reason: DismissReason) {
        if let DismissReason::Swipe(direction) = reason {
            if !self.view.content().position.enabled_swipes().contains(&direction) {
                return;
            }
        }
        if !self.begin_dismissal(reason) {
            return;
        }
        match reason {
            DismissReason::Decay | DismissReason::Manual => self.fade_out(),
            DismissReason::Swipe(direction) => self.slide_out(direction),
        }
    }

    fn on_swipe(self: &Rc<Self>, direction: SwipeDirection) {
        self.dismiss(DismissReason::Swipe(direction));
    }

    fn fade_out(self: &Rc<Self>) {
        let view = Rc::clone(&self.view);
        self.animate_then_discard(
            self.timings.fade_out,
            Box::new(move || view.set_alpha(0.0)),
        );
    }

    fn slide_out(self: &Rc<Self>, direction: SwipeDirection) {
        let view = Rc::clone(&self.view);
        let surface = self.surface();
        let relayout = move || {
            if let Some(surface) = &surface {
                surface.layout_if_needed();
            }
        };

        match direction {
            SwipeDirection::Left | SwipeDirection::Right => {
                let width = self.view.frame().width;
                let delta = if direction == SwipeDirection::Left {
                    -width
                } else {
                    width
                };
                self.animate_then_discard(
                    self.timings.swipe_out,
                    Box::new(move || {
                        view.with_layout(|layout| layout.center_x += delta);
                        relayout();
                    }),
                );
            }
            SwipeDirection::Up => {
                self.view.with_layout(|layout| {
                    layout.set_shown_active(false);
                    layout.set_hidden_active(true);
                });
                self.animate_then_discard(self.timings.swipe_out, Box::new(relayout));
            }
            SwipeDirection::Down => {
                // The shown constraint stays active here, unlike the upward
                // exit; the hidden one wins as the most recent activation.
                self.animate_then_discard(
                    self.timings.swipe_out,
                    Box::new(move || {
                        view.with_layout(|layout| layout.set_hidden_active(true));
                        relayout();
                    }),
                );
            }
        }
    }

    fn animate_then_discard(self: &Rc<Self>, duration: Duration, update: Box<dyn FnOnce()>) {
        let weak = Rc::downgrade(self);
        self.host.animator.animate(
            &self.view,
            duration,
            update,
            Box::new(move || {
                if let Some(instance) = weak.upgrade() {
                    instance.detach_and_discard();
                }
            }),
        );
    }

    /// Removes the view and releases every handle. Safe to call repeatedly;
    /// returns `true` only for the call that did the work.
    pub(crate) fn detach_and_discard(&self) -> bool {
        let (surface, timer, subscription) = {
            let mut state = self.state.borrow_mut();
            if state.lifecycle == LifecycleState::Removed {
                return false;
            }
            state.lifecycle = LifecycleState::Removed;
            (
                state.surface.take(),
                state.timer.take(),
                state.subscription.take(),
            )
        };

        if let Some(timer) = timer {
            timer.cancel();
        }
        if let Some(subscription) = subscription {
            self.host.gestures.unsubscribe(subscription);
        }
        if let Some(surface) = surface {
            surface.detach(self.view.id());
        }
        self.view.set_interaction_enabled(false);
        self.view.with_layout(|layout| layout.release());

        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.view.id());
        }
        tracing::debug!(view = self.view.id().value(), "toast removed");
        true
    }

    /// Recomputes the width constraint for `orientation`.
    pub(crate) fn update_width(&self, orientation: Orientation) {
        let Some(surface) = self.surface() else {
            return;
        };
        let width = toast_width(surface.bounds(), orientation);
        self.view.with_layout(|layout| layout.width = width);
    }
}

impl std::fmt::Debug for ToastInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastInstance")
            .field("view", &self.view.id())
            .field("lifecycle", &self.lifecycle())
            .field("decay", &self.decay)
            .finish_non_exhaustive()
    }
}
