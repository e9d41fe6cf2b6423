// SPDX-License-Identifier: MPL-2.0
//! Iced-backed toast host.
//!
//! [`Overlay`] implements every port on top of an Iced window: a canvas layer
//! acts as the surface, and animations and timers advance on the
//! application's frame tick. Embed it by stacking [`Overlay::view`] over the
//! application content and forwarding ticks, resizes and [`Message`]s.
//!
//! ```ignore
//! let overlay = Overlay::new(Instant::now());
//! let controller = ToastController::new(overlay.host());
//!
//! // In `update`:
//! Message::Tick(now) => overlay.tick(now),
//! Message::Overlay(message) => { overlay.handle(message); }
//!
//! // In `view`:
//! Stack::new().push(content).push(overlay.view())
//! ```

mod animator;
mod canvas;
mod gesture;
mod scheduler;
mod surface;

pub use animator::{ease_in_out, FrameAnimator};
pub use canvas::ToastLayer;
pub use gesture::{classify, SwipeRecognizer};
pub use scheduler::FrameScheduler;
pub use surface::{orientation_for, OverlayProvider, OverlaySurface};

use crate::config::defaults::SWIPE_MIN_DISTANCE;
use crate::domain::{Insets, ViewId};
use crate::port::Surface;
use crate::toast::Host;
use iced::widget::canvas as canvas_widget;
use iced::{Element, Length, Point, Size};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Time of the frame being processed.
#[derive(Debug)]
pub struct FrameClock(Cell<Instant>);

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self(Cell::new(now))
    }

    pub fn now(&self) -> Instant {
        self.0.get()
    }

    /// Moves the clock forward. Earlier instants are ignored.
    pub fn set(&self, now: Instant) {
        if now > self.0.get() {
            self.0.set(now);
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A press on `view` was released at `to`.
    Swipe { view: ViewId, from: Point, to: Point },
}

/// Host for toasts shown in one Iced window.
pub struct Overlay {
    clock: Rc<FrameClock>,
    surface: Rc<OverlaySurface>,
    provider: Rc<OverlayProvider>,
    animator: Rc<FrameAnimator>,
    scheduler: Rc<FrameScheduler>,
    gestures: Rc<SwipeRecognizer>,
}

impl Overlay {
    pub fn new(now: Instant) -> Self {
        let clock = Rc::new(FrameClock::new(now));
        let surface = Rc::new(OverlaySurface::new());
        Self {
            provider: Rc::new(OverlayProvider::new(Rc::clone(&surface))),
            animator: Rc::new(FrameAnimator::new(Rc::clone(&clock))),
            scheduler: Rc::new(FrameScheduler::new(Rc::clone(&clock))),
            gestures: Rc::new(SwipeRecognizer::new()),
            surface,
            clock,
        }
    }

    /// Collaborators for a [`ToastController`](crate::toast::ToastController).
    pub fn host(&self) -> Host {
        Host {
            surfaces: self.provider.clone(),
            animator: self.animator.clone(),
            gestures: self.gestures.clone(),
            scheduler: self.scheduler.clone(),
        }
    }

    pub fn surface(&self) -> &OverlaySurface {
        &self.surface
    }

    /// Advances timers and animations to `now`, then runs a layout pass.
    pub fn tick(&self, now: Instant) {
        self.clock.set(now);
        self.scheduler.advance(now);
        self.animator.advance(now);
        self.surface.layout_if_needed();
    }

    /// Records a new window size. Orientation follows the aspect ratio.
    pub fn resize(&self, size: Size) {
        self.surface.set_bounds(size);
        self.provider.set_orientation(orientation_for(size));
        tracing::debug!(width = size.width, height = size.height, "overlay resized");
    }

    pub fn set_safe_area(&self, insets: Insets) {
        self.surface.set_safe_area(insets);
    }

    /// While inactive the window offers no surface and `show` does nothing.
    pub fn set_active(&self, active: bool) {
        self.provider.set_active(active);
    }

    /// Handles a canvas message. Returns true if a swipe was delivered.
    pub fn handle(&self, message: Message) -> bool {
        match message {
            Message::Swipe { view, from, to } => {
                let Some(direction) = classify(from, to, SWIPE_MIN_DISTANCE) else {
                    return false;
                };
                let delivered = self.gestures.dispatch(view, direction);
                tracing::debug!(view = view.value(), ?direction, delivered, "swipe");
                delivered
            }
        }
    }

    /// True while anything is on screen or pending, i.e. while ticks matter.
    pub fn is_busy(&self) -> bool {
        self.animator.is_animating()
            || self.scheduler.pending_count() > 0
            || self.surface.has_toast_child()
    }

    pub fn view(&self) -> Element<'_, Message> {
        canvas_widget(ToastLayer::new(&self.surface))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl std::fmt::Debug for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overlay")
            .field("now", &self.clock.now())
            .field("active", &self.provider.is_active())
            .field("toasts", &self.surface.children().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LifecycleState, Orientation, SwipeDirection, ToastPosition};
    use crate::port::SurfaceProvider;
    use crate::toast::{ToastController, ToastRequest};
    use std::time::Duration;

    fn setup() -> (Overlay, ToastController, Instant) {
        let start = Instant::now();
        let overlay = Overlay::new(start);
        overlay.resize(Size::new(400.0, 800.0));
        let controller = ToastController::new(overlay.host());
        (overlay, controller, start)
    }

    #[test]
    fn clock_never_goes_backwards() {
        let start = Instant::now();
        let clock = FrameClock::new(start + Duration::from_secs(1));
        clock.set(start);
        assert_eq!(clock.now(), start + Duration::from_secs(1));
    }

    #[test]
    fn resize_sets_orientation() {
        let (overlay, _controller, _) = setup();
        assert_eq!(overlay.provider.current_orientation(), Orientation::Portrait);
        overlay.resize(Size::new(1024.0, 600.0));
        assert_eq!(overlay.provider.current_orientation(), Orientation::Landscape);
    }

    #[test]
    fn toast_runs_its_full_course_on_ticks() {
        let (overlay, controller, start) = setup();
        let handle = controller
            .present(ToastRequest::new("Saved").decay_in(Duration::from_secs(2)))
            .expect("surface available");
        assert_eq!(handle.state(), LifecycleState::Presenting);
        assert!(overlay.is_busy());

        overlay.tick(start + Duration::from_millis(600));
        assert_eq!(handle.state(), LifecycleState::Visible);
        assert!(handle.has_pending_timer());

        // Decay fires 2 s after `show`.
        overlay.tick(start + Duration::from_millis(1900));
        assert_eq!(handle.state(), LifecycleState::Visible);
        overlay.tick(start + Duration::from_millis(2100));
        assert_eq!(handle.state(), LifecycleState::Dismissing);

        overlay.tick(start + Duration::from_millis(3200));
        assert!(handle.is_removed());
        assert!(!overlay.is_busy());
        assert_eq!(controller.live_count(), 0);
    }

    #[test]
    fn huge_decay_keeps_toast_until_dismissed() {
        let (overlay, controller, start) = setup();
        let handle = controller
            .present(ToastRequest::new("Saved").decay_in(Duration::MAX))
            .expect("surface available");

        overlay.tick(start + Duration::from_secs(1));
        assert_eq!(handle.state(), LifecycleState::Visible);
        overlay.tick(start + Duration::from_secs(3600));
        assert_eq!(handle.state(), LifecycleState::Visible);
        assert!(handle.has_pending_timer());

        handle.dismiss();
        overlay.tick(start + Duration::from_secs(3602));
        assert!(handle.is_removed());
        assert!(!overlay.is_busy());
    }

    #[test]
    fn swipe_message_dismisses_toast() {
        let (overlay, controller, start) = setup();
        let handle = controller
            .present(ToastRequest::new("Saved").position(ToastPosition::Top))
            .expect("surface available");
        overlay.tick(start + Duration::from_millis(600));

        let from = Point::new(200.0, 60.0);
        let to = Point::new(320.0, 70.0);
        assert!(overlay.handle(Message::Swipe { view: handle.id(), from, to }));
        assert_eq!(handle.state(), LifecycleState::Dismissing);
        assert!(!handle.has_pending_timer());
    }

    #[test]
    fn short_drag_is_ignored() {
        let (overlay, controller, start) = setup();
        let handle = controller.present(ToastRequest::new("Saved")).expect("surface available");
        overlay.tick(start + Duration::from_millis(600));

        let from = Point::new(200.0, 60.0);
        assert!(!overlay.handle(Message::Swipe {
            view: handle.id(),
            from,
            to: Point::new(205.0, 62.0),
        }));
        assert_eq!(handle.state(), LifecycleState::Visible);
    }

    #[test]
    fn disabled_direction_is_not_delivered() {
        let (overlay, controller, start) = setup();
        let handle = controller
            .present(ToastRequest::new("Saved").position(ToastPosition::Top))
            .expect("surface available");
        overlay.tick(start + Duration::from_millis(600));

        let from = Point::new(200.0, 60.0);
        let down = Point::new(200.0, 200.0);
        assert_eq!(classify(from, down, SWIPE_MIN_DISTANCE), Some(SwipeDirection::Down));
        assert!(!overlay.handle(Message::Swipe { view: handle.id(), from, to: down }));
        assert_eq!(handle.state(), LifecycleState::Visible);
    }

    #[test]
    fn inactive_overlay_shows_nothing() {
        let (overlay, controller, _) = setup();
        overlay.set_active(false);
        controller.show(ToastRequest::new("Saved"));
        assert_eq!(controller.live_count(), 0);
        assert!(!overlay.surface().has_toast_child());
    }
}
