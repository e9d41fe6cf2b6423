// SPDX-License-Identifier: MPL-2.0
//! Gesture source port.

use crate::domain::{SwipeDirection, ViewId};
use std::rc::Rc;

/// Handler invoked once per completed swipe on a subscribed view.
pub type SwipeHandler = Rc<dyn Fn(SwipeDirection)>;

/// Token identifying a swipe subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

impl Subscription {
    /// Creates a new unique subscription token.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

/// Delivers discrete, direction-tagged swipe events against a view's bounds.
pub trait GestureSource {
    /// Registers `handler` for swipes over `view` in any of `directions`.
    /// Swipes in other directions are not delivered.
    fn subscribe(
        &self,
        view: ViewId,
        directions: &[SwipeDirection],
        handler: SwipeHandler,
    ) -> Subscription;

    /// Removes a subscription. Unknown tokens are ignored.
    fn unsubscribe(&self, subscription: Subscription);
}
