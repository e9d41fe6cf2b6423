// SPDX-License-Identifier: MPL-2.0
//! One-shot timers driven by the frame tick.

use super::FrameClock;
use crate::port::{Callback, Scheduler, TimerHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

struct Pending {
    /// `None` for delays past the end of the clock's range; never due.
    deadline: Option<Instant>,
    handle: TimerHandle,
    callback: Callback,
}

/// Timers fire on the first [`FrameScheduler::advance`] at or past their
/// deadline, in deadline order.
pub struct FrameScheduler {
    clock: Rc<FrameClock>,
    pending: RefCell<Vec<Pending>>,
}

impl FrameScheduler {
    pub fn new(clock: Rc<FrameClock>) -> Self {
        Self {
            clock,
            pending: RefCell::new(Vec::new()),
        }
    }

    /// Number of timers that are neither fired nor cancelled.
    pub fn pending_count(&self) -> usize {
        self.pending
            .borrow()
            .iter()
            .filter(|p| p.handle.is_pending())
            .count()
    }

    /// Fires every due timer. Returns how many callbacks ran.
    pub fn advance(&self, now: Instant) -> usize {
        let mut due: Vec<Pending> = {
            let mut pending = self.pending.borrow_mut();
            pending.retain(|p| p.handle.is_pending());
            let (due, later): (Vec<_>, Vec<_>) =
                pending.drain(..).partition(|p| p.deadline.is_some_and(|d| d <= now));
            *pending = later;
            due
        };
        due.sort_by_key(|p| p.deadline);

        let mut fired = 0;
        for timer in due {
            // A callback that ran earlier in this batch may have cancelled it.
            if timer.handle.fire() {
                (timer.callback)();
                fired += 1;
            }
        }
        fired
    }
}

impl Scheduler for FrameScheduler {
    fn schedule(&self, after: Duration, callback: Callback) -> TimerHandle {
        let handle = TimerHandle::new();
        let deadline = self.clock.now().checked_add(after);
        if deadline.is_none() {
            tracing::debug!(?after, "timer delay out of range, it will never fire");
        } else {
            tracing::trace!(?after, "timer scheduled");
        }
        self.pending.borrow_mut().push(Pending {
            deadline,
            handle: handle.clone(),
            callback,
        });
        handle
    }
}
