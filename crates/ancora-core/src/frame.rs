//! Value types exchanged with the keyboard event source and the list
//! measurement subsystem.

/// Sentinel for layout-derived values that have not been measured yet.
///
/// Used by [`LastUserMessage::position`] and by the blank-size fields on
/// [`ChatListState`](crate::ChatListState). Real measurements are never
/// negative, so `-1.0` is unambiguous.
pub const UNMEASURED: f32 = -1.0;

/// One keyboard lifecycle event sample.
///
/// Delivered by the native keyboard event source to the controller's
/// `on_start`/`on_interactive`/`on_move`/`on_end` callbacks.
///
/// `progress` runs in `[0, 1]` and is monotonic within a single open or
/// close transition: `1.0` marks the fully open target, `0.0` fully closed.
/// For start events the field carries the *target* progress of the
/// transition, which is how the controller infers direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyboardFrame {
    /// Raw transition progress in `[0, 1]`.
    pub progress: f32,
    /// Current on-screen keyboard height.
    pub height: f32,
    /// Final keyboard height this transition is heading toward.
    pub target: f32,
    /// Platform-reported transition duration in milliseconds.
    pub duration: f32,
}

impl KeyboardFrame {
    /// A start/settle event for a keyboard opening to (or resting at)
    /// `height`.
    pub fn open(height: f32) -> Self {
        Self {
            progress: 1.0,
            height,
            target: height,
            duration: 0.0,
        }
    }

    /// A start/settle event for a keyboard closing from `height`.
    pub fn close(height: f32) -> Self {
        Self {
            progress: 0.0,
            height,
            target: 0.0,
            duration: 0.0,
        }
    }

    /// An in-flight sample at `progress` of a transition whose keyboard
    /// height tracks `height`.
    pub fn at(progress: f32, height: f32, target: f32) -> Self {
        Self {
            progress,
            height,
            target,
            duration: 0.0,
        }
    }
}

/// The most recent message authored by the local user, as tracked by the
/// list measurement subsystem.
///
/// `position` is the message's top edge in content coordinates, or
/// [`UNMEASURED`] while layout has not run for it yet. `index` is `-1` when
/// no user message exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LastUserMessage {
    pub index: i64,
    pub position: f32,
}

impl LastUserMessage {
    /// No user message tracked.
    pub const NONE: LastUserMessage = LastUserMessage {
        index: -1,
        position: UNMEASURED,
    };

    pub fn new(index: i64, position: f32) -> Self {
        Self { index, position }
    }

    /// Whether layout has produced a position for this message.
    pub fn position_known(&self) -> bool {
        self.position >= 0.0
    }

    /// Whether this message is the last one in a list of `message_count`
    /// messages.
    pub fn is_newest(&self, message_count: usize) -> bool {
        self.index >= 0 && message_count > 0 && self.index as usize == message_count - 1
    }
}

impl Default for LastUserMessage {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close_frames_carry_target_progress() {
        assert_eq!(KeyboardFrame::open(320.0).progress, 1.0);
        assert_eq!(KeyboardFrame::open(320.0).target, 320.0);
        assert_eq!(KeyboardFrame::close(320.0).progress, 0.0);
        assert_eq!(KeyboardFrame::close(320.0).target, 0.0);
    }

    #[test]
    fn last_user_message_sentinels() {
        assert!(!LastUserMessage::NONE.position_known());
        assert!(!LastUserMessage::NONE.is_newest(10));
        let message = LastUserMessage::new(9, 1800.0);
        assert!(message.position_known());
        assert!(message.is_newest(10));
        assert!(!message.is_newest(11));
        assert!(!message.is_newest(0));
    }
}
