//! Shared chat list layout state.
//!
//! One bag of scalar fields describing the current geometry of the message
//! list, with a strict single-writer-per-field split:
//! - the list measurement subsystem writes layout-derived fields (scroll
//!   offset, content height, blank sizes, message count, ...);
//! - the keyboard engine only reads them and writes its results into the
//!   separate offset/transform [`ValueChannel`](crate::ValueChannel)s.
//!
//! As long as both writers stay on the serialized frame-callback queue, no
//! further synchronization is needed.

use std::cell::Cell;
use std::rc::Rc;

use crate::frame::{LastUserMessage, UNMEASURED};
use crate::send_animation::MessageSendAnimation;

/// Shared layout state of the message list.
///
/// Cloning is cheap and shares the underlying fields.
#[derive(Clone)]
pub struct ChatListState {
    inner: Rc<ChatListStateInner>,
}

struct ChatListStateInner {
    scroll_offset: Cell<f32>,
    content_height: Cell<f32>,
    viewport_height: Cell<f32>,
    composer_height: Cell<f32>,
    /// Safe-area inset below the composer, subtracted from the keyboard
    /// height when computing the content transform.
    bottom_inset: Cell<f32>,
    /// Padding between the last message and the composer edge.
    padding_bottom: Cell<f32>,
    /// Unused space below the last message while the keyboard is shown.
    /// `UNMEASURED` until the first layout pass with the keyboard up.
    blank_size: Cell<f32>,
    /// Unused space below the last message while the keyboard is hidden.
    blank_size_full: Cell<f32>,
    message_count: Cell<usize>,
    last_user_message: Cell<LastUserMessage>,
    send_animation: MessageSendAnimation,
}

impl ChatListState {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ChatListStateInner {
                scroll_offset: Cell::new(0.0),
                content_height: Cell::new(0.0),
                viewport_height: Cell::new(0.0),
                composer_height: Cell::new(0.0),
                bottom_inset: Cell::new(0.0),
                padding_bottom: Cell::new(0.0),
                blank_size: Cell::new(UNMEASURED),
                blank_size_full: Cell::new(0.0),
                message_count: Cell::new(0),
                last_user_message: Cell::new(LastUserMessage::NONE),
                send_animation: MessageSendAnimation::new(),
            }),
        }
    }

    pub fn scroll_offset(&self) -> f32 {
        self.inner.scroll_offset.get()
    }

    pub fn set_scroll_offset(&self, offset: f32) {
        self.inner.scroll_offset.set(offset);
    }

    pub fn content_height(&self) -> f32 {
        self.inner.content_height.get()
    }

    pub fn set_content_height(&self, height: f32) {
        if height < 0.0 {
            log::warn!("negative content height {height} from measurement, storing 0");
            self.inner.content_height.set(0.0);
            return;
        }
        self.inner.content_height.set(height);
    }

    pub fn viewport_height(&self) -> f32 {
        self.inner.viewport_height.get()
    }

    pub fn set_viewport_height(&self, height: f32) {
        self.inner.viewport_height.set(height.max(0.0));
    }

    pub fn composer_height(&self) -> f32 {
        self.inner.composer_height.get()
    }

    pub fn set_composer_height(&self, height: f32) {
        self.inner.composer_height.set(height.max(0.0));
    }

    pub fn bottom_inset(&self) -> f32 {
        self.inner.bottom_inset.get()
    }

    pub fn set_bottom_inset(&self, inset: f32) {
        self.inner.bottom_inset.set(inset.max(0.0));
    }

    pub fn padding_bottom(&self) -> f32 {
        self.inner.padding_bottom.get()
    }

    pub fn set_padding_bottom(&self, padding: f32) {
        self.inner.padding_bottom.set(padding.max(0.0));
    }

    /// Blank space below the last message with the keyboard shown, or
    /// [`UNMEASURED`].
    pub fn blank_size(&self) -> f32 {
        self.inner.blank_size.get()
    }

    pub fn set_blank_size(&self, size: f32) {
        self.inner.blank_size.set(size);
    }

    /// Blank space below the last message with the keyboard hidden.
    pub fn blank_size_full(&self) -> f32 {
        self.inner.blank_size_full.get()
    }

    pub fn set_blank_size_full(&self, size: f32) {
        self.inner.blank_size_full.set(size.max(0.0));
    }

    pub fn message_count(&self) -> usize {
        self.inner.message_count.get()
    }

    pub fn set_message_count(&self, count: usize) {
        self.inner.message_count.set(count);
    }

    pub fn last_user_message(&self) -> LastUserMessage {
        self.inner.last_user_message.get()
    }

    pub fn set_last_user_message(&self, message: LastUserMessage) {
        self.inner.last_user_message.set(message);
    }

    pub fn send_animation(&self) -> &MessageSendAnimation {
        &self.inner.send_animation
    }

    /// Largest valid scroll offset: the composer occupies the bottom of the
    /// viewport, so it extends the scrollable range.
    pub fn max_scroll_offset(&self) -> f32 {
        (self.content_height() + self.composer_height() - self.viewport_height()).max(0.0)
    }

    /// Distance between the current scroll position and the end of the
    /// list. Clamped to zero; a measurement race can briefly report content
    /// shorter than the viewport.
    pub fn dist_from_end(&self) -> f32 {
        (self.max_scroll_offset() - self.scroll_offset()).max(0.0)
    }
}

impl Default for ChatListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_from_end_accounts_for_composer() {
        let state = ChatListState::new();
        state.set_content_height(2000.0);
        state.set_viewport_height(800.0);
        state.set_composer_height(60.0);
        state.set_scroll_offset(1000.0);
        assert_eq!(state.max_scroll_offset(), 1260.0);
        assert_eq!(state.dist_from_end(), 260.0);
    }

    #[test]
    fn dist_from_end_clamps_during_measurement_races() {
        let state = ChatListState::new();
        state.set_content_height(100.0);
        state.set_viewport_height(800.0);
        state.set_scroll_offset(50.0);
        assert_eq!(state.max_scroll_offset(), 0.0);
        assert_eq!(state.dist_from_end(), 0.0);
    }

    #[test]
    fn negative_content_height_is_dropped() {
        let state = ChatListState::new();
        state.set_content_height(-5.0);
        assert_eq!(state.content_height(), 0.0);
    }

    #[test]
    fn blank_size_starts_unmeasured() {
        let state = ChatListState::new();
        assert_eq!(state.blank_size(), UNMEASURED);
        assert_eq!(state.blank_size_full(), 0.0);
    }
}
