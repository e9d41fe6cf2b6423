// SPDX-License-Identifier: MPL-2.0
//! Scheduler port and the cancellable timer handle it returns.

use super::Callback;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// State of a one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Pending,
    Fired,
    Cancelled,
}

/// Shared handle to a scheduled one-shot callback.
///
/// The scheduler keeps one clone next to the callback and calls
/// [`TimerHandle::fire`] when the deadline passes; the owner keeps another
/// clone to cancel. Whichever transition happens first wins.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    state: Rc<Cell<TimerState>>,
}

impl TimerHandle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(TimerState::Pending)),
        }
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state.get()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.get() == TimerState::Pending
    }

    /// Cancels the timer. Returns `true` if it was still pending.
    pub fn cancel(&self) -> bool {
        if self.is_pending() {
            self.state.set(TimerState::Cancelled);
            true
        } else {
            false
        }
    }

    /// Marks the timer as fired. Returns `true` if the callback should run.
    pub fn fire(&self) -> bool {
        if self.is_pending() {
            self.state.set(TimerState::Fired);
            true
        } else {
            false
        }
    }
}

impl Default for TimerHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedules one-shot callbacks on the UI thread.
pub trait Scheduler {
    /// Runs `callback` once after `after` has elapsed, unless the returned
    /// handle is cancelled first.
    fn schedule(&self, after: Duration, callback: Callback) -> TimerHandle;
}
