//! Scripted keyboard transition harness.
//!
//! Drives a fully wired [`KeyboardAnimationController`] with synthetic
//! keyboard lifecycle events, so tests read as scenario scripts:
//!
//! ```
//! use ancora_testing::KeyboardRobot;
//!
//! let robot = KeyboardRobot::new(300.0);
//! robot.seed_messages(10, 2400.0);
//! robot.place_at_bottom();
//!
//! robot.open_keyboard(4);
//! assert_eq!(robot.transform(), 300.0);
//! ```

use std::rc::Rc;

use ancora_core::{ChatListState, KeyboardFrame, LastUserMessage};
use ancora_keyboard::{KeyboardAnimationController, KeyboardAvoidanceConfig};

use crate::host::RecordingHost;

/// Default viewport height used by [`KeyboardRobot::new`].
const DEFAULT_VIEWPORT_HEIGHT: f32 = 800.0;
/// Default composer height used by [`KeyboardRobot::new`].
const DEFAULT_COMPOSER_HEIGHT: f32 = 56.0;

/// Harness driving scripted keyboard transitions against the engine.
pub struct KeyboardRobot {
    state: ChatListState,
    host: Rc<RecordingHost>,
    controller: KeyboardAnimationController,
    keyboard_height: f32,
}

impl KeyboardRobot {
    /// Creates a robot with a default viewport/composer layout and the
    /// given keyboard height.
    pub fn new(keyboard_height: f32) -> Self {
        Self::with_config(keyboard_height, KeyboardAvoidanceConfig::default())
    }

    pub fn with_config(keyboard_height: f32, config: KeyboardAvoidanceConfig) -> Self {
        let state = ChatListState::new();
        state.set_viewport_height(DEFAULT_VIEWPORT_HEIGHT);
        state.set_composer_height(DEFAULT_COMPOSER_HEIGHT);
        let host = Rc::new(RecordingHost::new());
        let controller = KeyboardAnimationController::new(
            state.clone(),
            Rc::clone(&host) as Rc<dyn ancora_core::ListHost>,
            config,
        );
        Self {
            state,
            host,
            controller,
            keyboard_height,
        }
    }

    pub fn state(&self) -> &ChatListState {
        &self.state
    }

    pub fn host(&self) -> &RecordingHost {
        &self.host
    }

    pub fn controller(&self) -> &KeyboardAnimationController {
        &self.controller
    }

    /// Current offset target.
    pub fn offset(&self) -> f32 {
        self.controller.offset_channel().get()
    }

    /// Current transform target.
    pub fn transform(&self) -> f32 {
        self.controller.transform_channel().get()
    }

    /// Populates the list with `count` messages totaling `content_height`.
    pub fn seed_messages(&self, count: usize, content_height: f32) {
        self.state.set_message_count(count);
        self.state.set_content_height(content_height);
        self.controller.reconcile_content_change();
    }

    /// Scrolls to the very end of the list.
    pub fn place_at_bottom(&self) {
        self.state.set_scroll_offset(self.state.max_scroll_offset());
    }

    /// Runs a full opening transition with `steps` move frames.
    pub fn open_keyboard(&self, steps: usize) {
        let height = self.keyboard_height;
        self.controller.on_start(KeyboardFrame::open(height));
        for step in 1..=steps {
            let progress = step as f32 / steps as f32;
            self.controller
                .on_move(KeyboardFrame::at(progress, height * progress, height));
        }
        self.controller.on_end(KeyboardFrame::open(height));
    }

    /// Runs a full closing transition with `steps` move frames.
    pub fn close_keyboard(&self, steps: usize) {
        let height = self.keyboard_height;
        self.controller.on_start(KeyboardFrame::close(height));
        for step in 1..=steps {
            let progress = 1.0 - step as f32 / steps as f32;
            self.controller
                .on_move(KeyboardFrame::at(progress, height * progress, 0.0));
        }
        self.controller.on_end(KeyboardFrame::close(height));
    }

    /// Feeds interactive-dismissal gesture frames at the given progresses.
    pub fn drag_dismiss(&self, progresses: &[f32]) {
        let height = self.keyboard_height;
        for &progress in progresses {
            self.controller
                .on_interactive(KeyboardFrame::at(progress, height * progress, 0.0));
        }
    }

    /// Completes an interactive dismissal the way the platform does: a
    /// spurious intermediate end event first, then the real one.
    pub fn finish_drag_dismiss(&self) {
        let height = self.keyboard_height;
        // Duplicate terminal event artifact: progress 0 but nonzero target.
        self.controller
            .on_end(KeyboardFrame::at(0.0, 0.0, height));
        self.controller.on_end(KeyboardFrame::close(height));
    }

    /// Registers a sent user message at `index` with the engine.
    pub fn send_message(&self, index: i64) {
        self.controller.notify_message_send(index);
    }

    /// The measurement subsystem reports the last user message's layout.
    pub fn measure_last_message(&self, index: i64, position: f32) {
        self.state
            .set_last_user_message(LastUserMessage::new(index, position));
        self.controller.notify_last_message_layout();
    }

    /// Ticks reveal animation frames `step_nanos` apart until it finishes
    /// or `max_frames` elapse. Returns the number of frames ticked.
    pub fn drive_reveal(&self, step_nanos: u64, max_frames: usize) -> usize {
        let mut now = 0u64;
        for frame in 0..max_frames {
            now += step_nanos;
            if !self.controller.on_frame(now) {
                return frame + 1;
            }
        }
        max_frames
    }
}
