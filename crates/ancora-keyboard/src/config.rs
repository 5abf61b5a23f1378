//! Engine configuration.

use std::time::Duration;

use ancora_core::send_animation::DEFAULT_SEND_ANIMATION_TIMEOUT;

use crate::constants::{CONTENT_CHANGE_EPSILON, DIST_FROM_END_THRESHOLD, REVEAL_DURATION_MILLIS};

/// Tunable parameters of the keyboard avoidance engine.
///
/// The defaults match the behavior the engine was calibrated with; override
/// individual fields for hosts with unusual layout metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardAvoidanceConfig {
    /// See [`DIST_FROM_END_THRESHOLD`].
    pub dist_from_end_threshold: f32,
    /// See [`CONTENT_CHANGE_EPSILON`].
    pub content_change_epsilon: f32,
    /// Debounce window after which a stale message-send flag expires.
    pub send_animation_timeout: Duration,
    /// Duration of the closed-keyboard reveal tween in milliseconds.
    pub reveal_duration_millis: u64,
}

impl Default for KeyboardAvoidanceConfig {
    fn default() -> Self {
        Self {
            dist_from_end_threshold: DIST_FROM_END_THRESHOLD,
            content_change_epsilon: CONTENT_CHANGE_EPSILON,
            send_animation_timeout: DEFAULT_SEND_ANIMATION_TIMEOUT,
            reveal_duration_millis: REVEAL_DURATION_MILLIS,
        }
    }
}
