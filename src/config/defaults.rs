// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all toast constants.
//!
//! This module serves as the single source of truth for geometry and timing
//! values used by the controller and the overlay host.
//!
//! # Categories
//!
//! - **Geometry**: Margins, minimum height, staging offsets
//! - **Timing**: Decay and animation durations
//! - **Typography**: Default font size

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Horizontal margin subtracted from the surface width (both sides combined).
pub const HORIZONTAL_MARGIN: f32 = 16.0;

/// Minimum toast height.
pub const MIN_HEIGHT: f32 = 60.0;

/// Gap between the top safe-area edge and a top-anchored toast.
pub const TOP_GAP: f32 = 8.0;

/// Distance below the surface's bottom edge where a bottom toast is staged.
pub const BOTTOM_STAGING_OFFSET: f32 = 200.0;

/// Surface width assumed when bounds are not known yet (portrait).
pub const FALLBACK_WIDTH: f32 = 300.0;

/// Surface height assumed when bounds are not known yet (landscape).
pub const FALLBACK_HEIGHT: f32 = 350.0;

/// Corner radius of the toast background.
pub const CORNER_RADIUS: f32 = 10.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time between the toast becoming visible and its fade-out (seconds).
pub const DEFAULT_DECAY_SECS: f32 = 4.0;

/// Entrance fade-in duration (seconds).
pub const FADE_IN_SECS: f32 = 0.5;

/// Swipe dismissal slide duration (seconds).
pub const SWIPE_OUT_SECS: f32 = 0.2;

/// Natural decay fade-out duration (seconds).
pub const FADE_OUT_SECS: f32 = 1.0;

/// Longest accepted animation duration from configuration (seconds).
pub const MAX_ANIMATION_SECS: f32 = 10.0;

// ==========================================================================
// Typography Defaults
// ==========================================================================

/// Default message font size.
pub const DEFAULT_FONT_SIZE: f32 = 15.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum pointer travel for a press/release pair to count as a swipe.
pub const SWIPE_MIN_DISTANCE: f32 = 30.0;

/// Compile-time validation of default values.
const _: () = {
    assert!(HORIZONTAL_MARGIN >= 0.0);
    assert!(MIN_HEIGHT > 0.0);
    assert!(FALLBACK_WIDTH > HORIZONTAL_MARGIN);
    assert!(FALLBACK_HEIGHT > HORIZONTAL_MARGIN);
    assert!(DEFAULT_DECAY_SECS > 0.0);
    assert!(FADE_IN_SECS > 0.0);
    assert!(SWIPE_OUT_SECS > 0.0);
    assert!(FADE_OUT_SECS > 0.0);
    assert!(MAX_ANIMATION_SECS >= FADE_OUT_SECS);
};
