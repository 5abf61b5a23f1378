//! Shared thresholds for the keyboard/scroll coordination engine.
//!
//! All values are in logical pixels unless noted. They are deliberately
//! fixed rather than density-scaled; hosts with unusual densities can
//! override the tunable subset through
//! [`KeyboardAvoidanceConfig`](crate::KeyboardAvoidanceConfig).

/// Distance from the end of the list beyond which the scroll position is
/// considered "far away".
///
/// Past this distance an animated reveal of a new message would sweep most
/// of a screen of content by; the engine jumps instead. Exactly this
/// distance still counts as near.
pub const SCROLL_FAR_AWAY_THRESHOLD: f32 = 1000.0;

/// Tolerance for treating the scroll position as anchored at the bottom.
///
/// Sub-pixel rounding and momentum settling leave the resting offset a few
/// pixels shy of the true end; within this band the closing-keyboard path
/// collapses blank space instead of counteracting the full transform.
pub const BOTTOM_ANCHOR_TOLERANCE: f32 = 12.0;

/// Distance from the end below which an opening keyboard may consume blank
/// space rather than shift content.
pub const DIST_FROM_END_THRESHOLD: f32 = 100.0;

/// Minimum change in the full-keyboard blank size that counts as a real
/// layout change for content-change reconciliation. Smaller wobble is
/// measurement noise.
pub const CONTENT_CHANGE_EPSILON: f32 = 0.5;

/// Duration of the smooth reveal of a freshly sent message while the
/// keyboard is closed, in milliseconds.
pub const REVEAL_DURATION_MILLIS: u64 = 350;
