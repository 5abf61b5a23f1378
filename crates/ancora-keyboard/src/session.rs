//! Mutable state of one keyboard transition.

/// Sentinel meaning "the first move of this session has not been processed
/// yet". Real scroll offsets are never negative.
pub const SCROLL_AT_START_UNSET: f32 = -1.0;

/// State accumulated over one keyboard transition.
///
/// Created implicitly by the first `on_start`/`on_interactive` event of a
/// transition, mutated through `on_move`, finalized at `on_end`. Exactly
/// one session is active at a time; a new `on_start` cancels whatever a
/// previous transition left behind by re-arming the first-move sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSession {
    /// Scroll offset snapshotted on the first move, or
    /// [`SCROLL_AT_START_UNSET`].
    pub scroll_at_start: f32,
    /// Direction of this transition.
    pub is_opening: bool,
    /// Scroll shift seeded at `on_start` from the blank-space geometry.
    pub amt_to_offset: f32,
    /// Content transform at full keyboard height.
    pub amt_to_transform: f32,
    /// A scroll-to-end was issued and is waiting for the target message's
    /// layout position.
    pub do_scroll_to_end: bool,
    /// An interactive dismissal gesture owns (or owned) this session.
    pub did_interactive: bool,
    /// Whether move events are processed at all.
    pub is_enabled: bool,
    /// Latched by an opening transition: apply the combined offset both
    /// while opening and while the keyboard later closes.
    pub offset_close_keyboard: bool,
    /// Keyboard height cached when the opening transition started.
    pub keyboard_height: f32,
}

impl AnimationSession {
    pub fn new() -> Self {
        Self {
            scroll_at_start: SCROLL_AT_START_UNSET,
            is_opening: false,
            amt_to_offset: 0.0,
            amt_to_transform: 0.0,
            do_scroll_to_end: false,
            did_interactive: false,
            is_enabled: false,
            offset_close_keyboard: false,
            keyboard_height: 0.0,
        }
    }

    /// Whether the first move of the current transition is still pending.
    pub fn is_armed(&self) -> bool {
        self.scroll_at_start == SCROLL_AT_START_UNSET
    }
}

impl Default for AnimationSession {
    fn default() -> Self {
        Self::new()
    }
}
