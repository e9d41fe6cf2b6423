// SPDX-License-Identifier: MPL-2.0
//! Swipe recognition for toast views.

use crate::domain::{SwipeDirection, ViewId};
use crate::port::{GestureSource, Subscription, SwipeHandler};
use iced::Point;
use std::cell::RefCell;
use std::rc::Rc;

struct Entry {
    subscription: Subscription,
    view: ViewId,
    directions: Vec<SwipeDirection>,
    handler: SwipeHandler,
}

/// Routes classified swipes to the handlers subscribed on a view.
#[derive(Default)]
pub struct SwipeRecognizer {
    entries: RefCell<Vec<Entry>>,
}

impl SwipeRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscription_count(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Delivers `direction` to the handlers of `view` that listen for it.
    /// Returns true if at least one handler ran.
    pub fn dispatch(&self, view: ViewId, direction: SwipeDirection) -> bool {
        let handlers: Vec<SwipeHandler> = self
            .entries
            .borrow()
            .iter()
            .filter(|e| e.view == view && e.directions.contains(&direction))
            .map(|e| Rc::clone(&e.handler))
            .collect();
        // Handlers unsubscribe while running, so the borrow must be released.
        for handler in &handlers {
            handler(direction);
        }
        !handlers.is_empty()
    }
}

impl GestureSource for SwipeRecognizer {
    fn subscribe(
        &self,
        view: ViewId,
        directions: &[SwipeDirection],
        handler: SwipeHandler,
    ) -> Subscription {
        let subscription = Subscription::new();
        self.entries.borrow_mut().push(Entry {
            subscription,
            view,
            directions: directions.to_vec(),
            handler,
        });
        subscription
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.entries
            .borrow_mut()
            .retain(|e| e.subscription != subscription);
    }
}

/// Classifies a press-release pair as a swipe along its dominant axis.
///
/// Screen y grows downwards, so a positive vertical delta is a swipe down.
/// Returns `None` for drags shorter than `min_distance`.
#[must_use]
pub fn classify(from: Point, to: Point, min_distance: f32) -> Option<SwipeDirection> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx.abs() >= dy.abs() {
        if dx.abs() < min_distance {
            None
        } else if dx > 0.0 {
            Some(SwipeDirection::Right)
        } else {
            Some(SwipeDirection::Left)
        }
    } else if dy.abs() < min_distance {
        None
    } else if dy > 0.0 {
        Some(SwipeDirection::Down)
    } else {
        Some(SwipeDirection::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn classify_picks_dominant_axis() {
        let origin = Point::new(100.0, 100.0);
        assert_eq!(classify(origin, Point::new(160.0, 110.0), 30.0), Some(SwipeDirection::Right));
        assert_eq!(classify(origin, Point::new(40.0, 90.0), 30.0), Some(SwipeDirection::Left));
        assert_eq!(classify(origin, Point::new(110.0, 40.0), 30.0), Some(SwipeDirection::Up));
        assert_eq!(classify(origin, Point::new(90.0, 170.0), 30.0), Some(SwipeDirection::Down));
    }

    #[test]
    fn short_drags_are_not_swipes() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(classify(origin, Point::new(10.0, 5.0), 30.0), None);
        assert_eq!(classify(origin, origin, 30.0), None);
    }

    #[test]
    fn dispatch_respects_directions_and_unsubscribe() {
        let recognizer = SwipeRecognizer::new();
        let view = ViewId::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let subscription = recognizer.subscribe(
            view,
            &[SwipeDirection::Left, SwipeDirection::Right],
            Rc::new(move |_| counter.set(counter.get() + 1)),
        );

        assert!(recognizer.dispatch(view, SwipeDirection::Left));
        assert!(!recognizer.dispatch(view, SwipeDirection::Down));
        assert!(!recognizer.dispatch(ViewId::new(), SwipeDirection::Left));
        assert_eq!(hits.get(), 1);

        recognizer.unsubscribe(subscription);
        assert_eq!(recognizer.subscription_count(), 0);
        assert!(!recognizer.dispatch(view, SwipeDirection::Right));
    }
}
