//! Per-frame move resolution.
//!
//! [`resolve_move`] turns one snapshot of shared state plus a keyboard
//! event sample into either a frame's offset/transform targets or a
//! scroll-to-end command. It is pure: the controller snapshots state into
//! [`MoveInputs`], and performs any mutation (anchor capture, flag setting)
//! itself based on the outcome.

use crate::geometry::is_scroll_far_away;
use crate::session::SCROLL_AT_START_UNSET;

/// Snapshot of everything one move resolution depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveInputs {
    /// Raw event progress in `[0, 1]`, tracking the keyboard height.
    pub raw_progress: f32,
    /// Whether this frame belongs to an interactive dismissal gesture.
    pub interactive: bool,
    /// Direction latched at the start of the transition.
    pub is_opening: bool,
    /// Scroll offset captured on the session's first move, or
    /// [`SCROLL_AT_START_UNSET`].
    pub scroll_at_start: f32,
    /// Current scroll offset.
    pub scroll_offset: f32,
    /// Current content height.
    pub content_height: f32,
    /// Scroll shift seeded at the start of the transition.
    pub amt_to_offset: f32,
    /// Content transform at full keyboard height.
    pub amt_to_transform: f32,
    /// Whether the offset-close-keyboard mode was latched by an opening.
    pub offset_close_enabled: bool,
    /// Whether a message-send animation is live.
    pub message_send_animating: bool,
    /// Whether a scroll-to-end command was already issued this session.
    pub scroll_to_end_queued: bool,
    /// Top edge of the last user message in content coordinates, or a
    /// negative sentinel while layout has not measured it.
    pub last_message_position: f32,
    /// Padding between the last message and the composer edge.
    pub padding_bottom: f32,
}

/// Offset/transform targets for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameValues {
    /// Scroll offset target, or `None` when this frame needs no scroll
    /// correction.
    pub offset_y: Option<f32>,
    /// Content transform target.
    pub translate_y: f32,
    /// When set, the consumer must process this frame even though the
    /// offset target equals the previous one. Raised while an interactive
    /// dismissal pins the scroll position in place.
    pub force_tick: bool,
}

/// Result of resolving one move: either frame targets or a command to jump
/// to the end of the list. Never both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    ScrollToEnd,
    Frame(FrameValues),
}

/// Resolves one keyboard movement frame.
///
/// Branch order is a priority chain, not independent conditions: a live
/// message-send animation always wins, then the latched offset mode, then
/// the interactive pin, else the frame only updates the transform.
pub fn resolve_move(inputs: &MoveInputs) -> MoveOutcome {
    let translate_y = inputs.raw_progress * inputs.amt_to_transform;

    let is_first_move = inputs.scroll_at_start == SCROLL_AT_START_UNSET;
    let anchor = if is_first_move {
        inputs.scroll_offset
    } else {
        inputs.scroll_at_start
    };

    if is_first_move
        && inputs.message_send_animating
        && !inputs.is_opening
        && !inputs.scroll_to_end_queued
        && (inputs.last_message_position < 0.0
            || is_scroll_far_away(inputs.content_height, inputs.scroll_offset))
    {
        // The keyboard is closing on a freshly sent message whose resting
        // position we either do not know or could not smoothly reach.
        return MoveOutcome::ScrollToEnd;
    }

    // Progress that grows 0 -> 1 over the transition in either direction.
    let progress = if inputs.is_opening {
        inputs.raw_progress
    } else {
        1.0 - inputs.raw_progress
    };

    let mut force_tick = false;
    let offset_y = if inputs.message_send_animating {
        // Ride the scroll toward the sent message's resting position.
        Some(anchor + (inputs.last_message_position - anchor - inputs.padding_bottom) * progress)
    } else if inputs.offset_close_enabled
        && inputs.amt_to_offset + inputs.amt_to_transform != 0.0
    {
        let total = inputs.amt_to_offset + inputs.amt_to_transform;
        Some(if inputs.is_opening {
            anchor + total * progress
        } else {
            anchor - total * progress
        })
    } else if inputs.interactive {
        // Pin the scroll at the anchor while the gesture drags the
        // keyboard; the tick forces consumers to process the unchanged
        // target every frame.
        force_tick = true;
        Some(anchor)
    } else {
        None
    };

    MoveOutcome::Frame(FrameValues {
        offset_y,
        translate_y,
        force_tick,
    })
}

#[cfg(test)]
#[path = "tests/move_resolver_tests.rs"]
mod tests;
