// SPDX-License-Identifier: MPL-2.0
//! Frame-driven animator.
//!
//! Each animation snapshots the view's presentation, runs the update block,
//! then interpolates from the snapshot to the new model values on every
//! [`FrameAnimator::advance`]. Only properties changed by the update are
//! overridden, so a fade and a slide on the same view compose.

use super::FrameClock;
use crate::port::{Animator, Callback};
use crate::toast::view::AnimationId;
use crate::toast::{Presentation, ToastView};
use iced::Rectangle;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

struct Running {
    id: AnimationId,
    view: Rc<ToastView>,
    start: Instant,
    duration: Duration,
    from: Presentation,
    to: Presentation,
    alpha: bool,
    frame: bool,
    completion: Callback,
}

pub struct FrameAnimator {
    clock: Rc<FrameClock>,
    running: RefCell<Vec<Running>>,
    next_id: Cell<AnimationId>,
}

impl FrameAnimator {
    pub fn new(clock: Rc<FrameClock>) -> Self {
        Self {
            clock,
            running: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn is_animating(&self) -> bool {
        !self.running.borrow().is_empty()
    }

    /// Applies interpolated values for `now` and completes finished animations.
    pub fn advance(&self, now: Instant) {
        let finished: Vec<Running> = {
            let mut running = self.running.borrow_mut();
            for animation in running.iter() {
                let t = progress(animation.start, animation.duration, now);
                apply(animation, ease_in_out(t));
            }
            let (done, pending): (Vec<_>, Vec<_>) = running
                .drain(..)
                .partition(|a| progress(a.start, a.duration, now) >= 1.0);
            *running = pending;
            done
        };
        // Completions may start new animations; the borrow is released here.
        for animation in finished {
            animation.view.clear_overrides(animation.id);
            tracing::trace!(animation = animation.id, "animation finished");
            (animation.completion)();
        }
    }

    /// Completes every running animation at its end state.
    pub fn finish_all(&self) {
        loop {
            let running: Vec<Running> = self.running.borrow_mut().drain(..).collect();
            if running.is_empty() {
                break;
            }
            for animation in running {
                animation.view.clear_overrides(animation.id);
                (animation.completion)();
            }
        }
    }
}

impl Animator for FrameAnimator {
    fn animate(
        &self,
        view: &Rc<ToastView>,
        duration: Duration,
        update: Callback,
        completion: Callback,
    ) {
        let from = view.presentation();
        update();
        let to = view.model_presentation();

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let alpha = from.alpha != to.alpha;
        let frame = from.frame != to.frame;
        if alpha {
            view.set_alpha_override(id, from.alpha);
        }
        if frame {
            view.set_frame_override(id, from.frame);
        }
        tracing::trace!(animation = id, ?duration, alpha, frame, "animation started");

        self.running.borrow_mut().push(Running {
            id,
            view: Rc::clone(view),
            start: self.clock.now(),
            duration,
            from,
            to,
            alpha,
            frame,
            completion,
        });
    }
}

fn progress(start: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

fn apply(animation: &Running, t: f32) {
    if animation.alpha {
        let alpha = lerp(animation.from.alpha, animation.to.alpha, t);
        animation.view.set_alpha_override(animation.id, alpha);
    }
    if animation.frame {
        let frame = lerp_rect(animation.from.frame, animation.to.frame, t);
        animation.view.set_frame_override(animation.id, frame);
    }
}

/// Smoothstep easing, close to the usual ease-in-out curve.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp_rect(a: Rectangle, b: Rectangle, t: f32) -> Rectangle {
    Rectangle {
        x: lerp(a.x, b.x, t),
        y: lerp(a.y, b.y, t),
        width: lerp(a.width, b.width, t),
        height: lerp(a.height, b.height, t),
    }
}
