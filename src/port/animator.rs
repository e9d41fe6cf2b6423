// SPDX-License-Identifier: MPL-2.0
//! Animator port.

use super::Callback;
use crate::toast::ToastView;
use std::rc::Rc;
use std::time::Duration;

/// Runs timed property transitions on a view.
///
/// # Contract
///
/// 1. `update` runs synchronously inside `animate` and mutates the view's
///    model properties (alpha, constraints) and may request a layout pass
/// 2. The animator interpolates the view's presentation from its state
///    before `update` to its state after, over `duration`
/// 3. `completion` runs exactly once, later, on the same thread, whether
///    the transition finished or was interrupted
pub trait Animator {
    fn animate(
        &self,
        view: &Rc<ToastView>,
        duration: Duration,
        update: Callback,
        completion: Callback,
    );
}
