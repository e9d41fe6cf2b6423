// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for toast values,
//! ensuring they are always valid once constructed.

use crate::config::defaults::DEFAULT_DECAY_SECS;
use crate::error::{Error, Result};
use std::time::Duration;

// =============================================================================
// DecayInterval
// =============================================================================

/// Time between a toast becoming visible and the start of its fade-out.
///
/// Unlike the clamping newtypes used for configuration values, a decay
/// interval is a caller precondition: zero is rejected rather than bumped.
///
/// # Example
///
/// ```
/// use iced_toast::domain::DecayInterval;
/// use std::time::Duration;
///
/// let decay = DecayInterval::new(Duration::from_secs(2)).unwrap();
/// assert_eq!(decay.as_duration(), Duration::from_secs(2));
///
/// assert!(DecayInterval::new(Duration::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DecayInterval(Duration);

impl DecayInterval {
    /// Creates a decay interval.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDecay`] if `duration` is zero.
    pub fn new(duration: Duration) -> Result<Self> {
        if duration.is_zero() {
            return Err(Error::InvalidDecay(duration));
        }
        Ok(Self(duration))
    }

    /// Creates a decay interval from fractional seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDecay`] for zero, negative, or non-finite input.
    pub fn from_secs_f32(secs: f32) -> Result<Self> {
        match Duration::try_from_secs_f32(secs) {
            Ok(duration) => Self::new(duration),
            Err(_) => Err(Error::InvalidDecay(Duration::ZERO)),
        }
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for DecayInterval {
    fn default() -> Self {
        Self(Duration::from_secs_f32(DEFAULT_DECAY_SECS))
    }
}

// =============================================================================
// ViewId
// =============================================================================

/// Unique identifier for an attachable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    /// Creates a new unique view ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_decay_is_rejected() {
        assert_eq!(
            DecayInterval::new(Duration::ZERO),
            Err(Error::InvalidDecay(Duration::ZERO))
        );
    }

    #[test]
    fn negative_and_nan_secs_are_rejected() {
        assert!(DecayInterval::from_secs_f32(-1.0).is_err());
        assert!(DecayInterval::from_secs_f32(f32::NAN).is_err());
        assert!(DecayInterval::from_secs_f32(0.0).is_err());
    }

    #[test]
    fn fractional_secs_are_accepted() {
        let decay = DecayInterval::from_secs_f32(0.25).expect("valid decay");
        assert_eq!(decay.as_duration(), Duration::from_millis(250));
    }

    #[test]
    fn default_is_four_seconds() {
        assert_eq!(DecayInterval::default().as_duration(), Duration::from_secs(4));
    }

    #[test]
    fn view_ids_are_unique() {
        let a = ViewId::new();
        let b = ViewId::new();
        assert_ne!(a, b);
        assert!(b.value() > a.value());
    }
}
