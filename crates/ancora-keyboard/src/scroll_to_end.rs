//! Scroll-to-end coordination.
//!
//! Decides between an instantaneous jump and a smooth reveal when a newly
//! sent message must come into view, and drives the reveal tween from host
//! frame ticks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ancora_animation::{AnimationSpec, Easing, TweenAnimation};
use ancora_core::{ChatListState, ListHost, ScrollToEndMode, ValueChannel};

use crate::geometry::is_scroll_far_away;

/// Coordinates scroll-to-end requests for the message list.
///
/// Two situations produce one:
/// - mid keyboard transition, when the move resolver decides a sent message
///   cannot be tracked smoothly; the jump happens immediately.
/// - with the keyboard at rest, when a newer user message supersedes the
///   tracked one. Far positions jump, near ones get a fixed-duration
///   reveal tween written to the offset channel.
pub struct ScrollToEndCoordinator {
    state: ChatListState,
    host: Rc<dyn ListHost>,
    offset: ValueChannel,
    /// Index of the newest user message already handled; only strictly
    /// newer indices trigger another reveal.
    tracked_index: Cell<i64>,
    reveal: RefCell<Option<TweenAnimation>>,
    reveal_duration_millis: u64,
}

impl ScrollToEndCoordinator {
    pub fn new(
        state: ChatListState,
        host: Rc<dyn ListHost>,
        offset: ValueChannel,
        reveal_duration_millis: u64,
    ) -> Self {
        Self {
            state,
            host,
            offset,
            tracked_index: Cell::new(-1),
            reveal: RefCell::new(None),
            reveal_duration_millis,
        }
    }

    /// Immediate, non-animated jump to the end of the list.
    pub fn jump_to_end(&self) {
        log::debug!("scroll-to-end: immediate jump");
        self.reveal.borrow_mut().take();
        self.host.scroll_to_end(ScrollToEndMode::Immediate);
    }

    /// A message send began while the keyboard is at rest (hidden).
    ///
    /// Ignored unless `index` supersedes the tracked newest user message.
    pub fn on_send_while_hidden(&self, index: i64) {
        if index <= self.tracked_index.get() {
            return;
        }
        self.tracked_index.set(index);
        self.reveal_from_closed();
    }

    /// Runs the closed-keyboard reveal path: jump when far from the bottom
    /// (the tracked position may be stale), otherwise tween the scroll
    /// offset to the message's resting position.
    pub fn reveal_from_closed(&self) {
        if is_scroll_far_away(self.state.content_height(), self.state.scroll_offset()) {
            self.jump_to_end();
            return;
        }
        let target = self.reveal_target();
        log::debug!("scroll-to-end: revealing at offset {target}");
        *self.reveal.borrow_mut() = Some(TweenAnimation::new(
            self.state.scroll_offset(),
            target,
            AnimationSpec::tween(self.reveal_duration_millis, Easing::FastOutSlowIn),
        ));
    }

    /// Advances the active reveal tween, writing the interpolated offset to
    /// the channel. Returns whether a reveal is still in progress.
    pub fn on_frame(&self, frame_time_nanos: u64) -> bool {
        let mut slot = self.reveal.borrow_mut();
        let Some(tween) = slot.as_mut() else {
            return false;
        };
        let value = tween.value_at(frame_time_nanos);
        let finished = tween.is_finished();
        drop(slot);
        self.offset.set(value.max(0.0));
        if finished {
            self.reveal.borrow_mut().take();
        }
        !finished
    }

    /// Whether a reveal tween is currently running.
    pub fn is_revealing(&self) -> bool {
        self.reveal.borrow().is_some()
    }

    /// Resting offset for the reveal: the tracked message's top edge minus
    /// the bottom padding when layout knows it, else the end of the list.
    fn reveal_target(&self) -> f32 {
        let message = self.state.last_user_message();
        let max_offset = self.state.max_scroll_offset();
        if message.position_known() {
            (message.position - self.state.padding_bottom()).clamp(0.0, max_offset)
        } else {
            max_offset
        }
    }
}
