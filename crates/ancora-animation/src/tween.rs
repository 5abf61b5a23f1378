//! Duration-based tween driven by host frame timestamps.

use crate::easing::{Easing, Lerp};

/// Duration and easing for a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// A single `f32` tween from a start value to a target.
///
/// The host feeds frame timestamps in nanoseconds; the first timestamp seen
/// becomes the animation's start time. `value_at` is monotone in time and
/// clamps at the target once the duration elapses.
#[derive(Debug, Clone)]
pub struct TweenAnimation {
    start: f32,
    target: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    finished: bool,
}

impl TweenAnimation {
    pub fn new(start: f32, target: f32, spec: AnimationSpec) -> Self {
        Self {
            start,
            target,
            spec,
            start_time_nanos: None,
            finished: false,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// The tween value at the given frame time.
    ///
    /// The first call pins the start time; later timestamps are measured
    /// against it. Reaching the end of the duration marks the tween
    /// finished and returns exactly the target.
    pub fn value_at(&mut self, frame_time_nanos: u64) -> f32 {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start_time);
        let duration = (self.spec.duration_millis * 1_000_000).max(1);
        let linear = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);
        if linear >= 1.0 {
            self.finished = true;
            return self.target;
        }
        let eased = self.spec.easing.transform(linear);
        self.start.lerp(&self.target, eased)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;
