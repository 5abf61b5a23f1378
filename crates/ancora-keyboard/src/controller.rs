//! Keyboard animation controller.
//!
//! The stateful orchestrator behind the engine: it owns the
//! [`AnimationSession`], wires the keyboard lifecycle callbacks to the pure
//! geometry and move-resolution functions, and writes the resulting
//! offset/transform targets into the shared channels. All mutation lives
//! here; the math it delegates to is side-effect free.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ancora_core::{ChatListState, KeyboardFrame, ListHost, ValueChannel};

use crate::config::KeyboardAvoidanceConfig;
use crate::geometry::{offset_when_closing, offset_when_opening};
use crate::move_resolver::{resolve_move, MoveInputs, MoveOutcome};
use crate::scroll_to_end::ScrollToEndCoordinator;
use crate::session::{AnimationSession, SCROLL_AT_START_UNSET};

/// Dual keyboard visibility trackers.
///
/// `requested` follows start events, `settled` follows end events. The two
/// are written at different points of a transition on purpose: content
/// reconciliation must only act when both agree the keyboard is fully
/// shown, otherwise a transition that was started and then cancelled could
/// leave a stale "shown" reading and trigger a replay against geometry the
/// keyboard never reached.
struct KeyboardVisibility {
    requested_shown: Cell<bool>,
    settled_shown: Cell<bool>,
}

impl KeyboardVisibility {
    fn new() -> Self {
        Self {
            requested_shown: Cell::new(false),
            settled_shown: Cell::new(false),
        }
    }

    fn set_requested(&self, shown: bool) {
        self.requested_shown.set(shown);
    }

    fn set_settled(&self, shown: bool) {
        self.settled_shown.set(shown);
    }

    /// Keyboard confirmed fully shown by both trackers.
    fn did_show(&self) -> bool {
        self.requested_shown.get() && self.settled_shown.get()
    }

    /// Keyboard confirmed fully hidden by both trackers.
    fn did_hide(&self) -> bool {
        !self.requested_shown.get() && !self.settled_shown.get()
    }
}

/// The keyboard-animation state machine.
///
/// Receives keyboard lifecycle events from the native event source, reads
/// the shared [`ChatListState`], and publishes scroll offset and content
/// transform targets through its two [`ValueChannel`]s. Within one
/// transition the host guarantees `on_start` precedes every `on_move`,
/// which precede the terminal `on_end`; everything runs on the serialized
/// frame-callback queue.
pub struct KeyboardAnimationController {
    state: ChatListState,
    host: Rc<dyn ListHost>,
    config: KeyboardAvoidanceConfig,
    offset: ValueChannel,
    transform: ValueChannel,
    session: RefCell<AnimationSession>,
    visibility: KeyboardVisibility,
    coordinator: ScrollToEndCoordinator,
    seen_message_count: Cell<usize>,
    seen_blank_size_full: Cell<f32>,
}

impl KeyboardAnimationController {
    pub fn new(
        state: ChatListState,
        host: Rc<dyn ListHost>,
        config: KeyboardAvoidanceConfig,
    ) -> Self {
        state
            .send_animation()
            .set_timeout(config.send_animation_timeout);
        let offset = ValueChannel::new(state.scroll_offset());
        let transform = ValueChannel::new(0.0);
        let coordinator = ScrollToEndCoordinator::new(
            state.clone(),
            Rc::clone(&host),
            offset.clone(),
            config.reveal_duration_millis,
        );
        Self {
            state,
            host,
            config,
            offset,
            transform,
            session: RefCell::new(AnimationSession::new()),
            visibility: KeyboardVisibility::new(),
            coordinator,
            seen_message_count: Cell::new(0),
            seen_blank_size_full: Cell::new(0.0),
        }
    }

    /// Scroll offset targets produced by the engine.
    pub fn offset_channel(&self) -> &ValueChannel {
        &self.offset
    }

    /// Content transform targets produced by the engine.
    pub fn transform_channel(&self) -> &ValueChannel {
        &self.transform
    }

    pub fn state(&self) -> &ChatListState {
        &self.state
    }

    /// Snapshot of the current session, for diagnostics and tests.
    pub fn session(&self) -> AnimationSession {
        *self.session.borrow()
    }

    /// Whether both visibility trackers agree the keyboard is fully shown.
    pub fn is_keyboard_shown(&self) -> bool {
        self.visibility.did_show()
    }

    /// A keyboard transition is starting. `frame.progress` carries the
    /// target: 1 for opening, 0 for closing.
    pub fn on_start(&self, frame: KeyboardFrame) {
        self.visibility.set_requested(frame.progress == 1.0);

        let was_interactive = self.session.borrow().did_interactive;
        if was_interactive {
            // An interactive dismissal was abandoned mid-gesture and the
            // keyboard is transitioning again; drop the partial shift.
            self.transform.set(0.0);
        }

        let enabled = self.state.message_count() > 1 && !was_interactive;
        if !enabled {
            log::trace!(
                "keyboard start ignored: messages={}, interactive={}",
                self.state.message_count(),
                was_interactive
            );
            self.session.borrow_mut().is_enabled = false;
            return;
        }

        self.host.set_scroll_indicator_visible(false);

        {
            let mut session = self.session.borrow_mut();
            session.is_enabled = true;
            session.scroll_at_start = SCROLL_AT_START_UNSET;
            session.is_opening = frame.progress == 1.0;
            if session.is_opening {
                session.offset_close_keyboard = true;
                session.keyboard_height = frame.height;
            }

            let transform_amt = (session.keyboard_height - self.state.bottom_inset()).max(0.0);
            session.amt_to_transform = transform_amt;

            let dist_from_end = self.state.dist_from_end();
            session.amt_to_offset = if session.is_opening {
                let blank_size = self.state.blank_size().max(0.0);
                offset_when_opening(
                    dist_from_end,
                    blank_size,
                    transform_amt,
                    self.config.dist_from_end_threshold,
                    transform_amt,
                )
            } else {
                offset_when_closing(dist_from_end, self.state.blank_size_full(), transform_amt)
            };
            log::trace!(
                "keyboard start: opening={}, transform={}, offset={}",
                session.is_opening,
                session.amt_to_transform,
                session.amt_to_offset
            );
        }

        // Per-frame offset writes must stay cheap while the keyboard moves;
        // a live send animation needs the recompute to track its insert.
        if !self.state.send_animation().is_animating() {
            self.host.set_scroll_processing_enabled(false);
        }
    }

    /// One movement frame of the active transition.
    pub fn on_move(&self, frame: KeyboardFrame) {
        self.on_move_with(frame, false, false);
    }

    fn on_move_with(&self, frame: KeyboardFrame, interactive: bool, skip_offset: bool) {
        let inputs = {
            let session = self.session.borrow();
            if !session.is_enabled {
                return;
            }
            MoveInputs {
                raw_progress: frame.progress,
                interactive,
                is_opening: session.is_opening,
                scroll_at_start: session.scroll_at_start,
                scroll_offset: self.state.scroll_offset(),
                content_height: self.state.content_height(),
                amt_to_offset: session.amt_to_offset,
                amt_to_transform: session.amt_to_transform,
                offset_close_enabled: session.offset_close_keyboard,
                message_send_animating: self.state.send_animation().is_animating(),
                scroll_to_end_queued: session.do_scroll_to_end,
                last_message_position: self.state.last_user_message().position,
                padding_bottom: self.state.padding_bottom(),
            }
        };

        let outcome = resolve_move(&inputs);

        if inputs.scroll_at_start == SCROLL_AT_START_UNSET {
            self.session.borrow_mut().scroll_at_start = inputs.scroll_offset;
        }

        match outcome {
            MoveOutcome::ScrollToEnd => {
                self.session.borrow_mut().do_scroll_to_end = true;
                self.coordinator.jump_to_end();
            }
            MoveOutcome::Frame(values) => {
                let scroll_to_end_pending = self.session.borrow().do_scroll_to_end;
                if !skip_offset && !scroll_to_end_pending {
                    if let Some(offset_y) = values.offset_y {
                        self.offset.set(offset_y.max(0.0));
                    }
                }
                self.transform.set(values.translate_y);
                if values.force_tick {
                    self.offset.force_tick();
                }
            }
        }
    }

    /// A frame of a user-driven swipe-to-dismiss gesture.
    ///
    /// The first call of a session stands in for the start event the
    /// gesture never delivers; every call is then treated as a pinned,
    /// offset-skipping move.
    pub fn on_interactive(&self, frame: KeyboardFrame) {
        let first = !self.session.borrow().did_interactive;
        if first {
            self.on_start(frame);
            self.session.borrow_mut().did_interactive = true;
        }
        self.on_move_with(frame, true, true);
    }

    /// The transition reached its end state.
    pub fn on_end(&self, frame: KeyboardFrame) {
        self.on_end_with(frame, false);
    }

    fn on_end_with(&self, frame: KeyboardFrame, skip_offset: bool) {
        {
            let session = self.session.borrow();
            // Interactive dismissal fires an extra end event partway
            // through (progress 0 with a nonzero target). Platform
            // compatibility shim: drop it without touching any state.
            if session.did_interactive && frame.progress == 0.0 && frame.target > 0.0 {
                log::trace!("dropping duplicate end event from interactive dismissal");
                return;
            }
        }

        self.state.send_animation().clear();
        // The final move must not be skipped by a disabled session; it is
        // what guarantees the channels converge to the resting values.
        self.session.borrow_mut().is_enabled = true;
        self.on_move_with(frame, false, skip_offset);

        self.host.set_scroll_processing_enabled(true);
        self.host.set_scroll_indicator_visible(true);

        {
            let mut session = self.session.borrow_mut();
            session.scroll_at_start = SCROLL_AT_START_UNSET;
            session.did_interactive = false;
        }

        self.visibility.set_settled(frame.progress == 1.0);
    }

    /// The measurement subsystem pushed a new message count or blank size.
    ///
    /// While the keyboard is confirmed fully shown, a material change
    /// (count, or blank size by more than the configured epsilon) replays
    /// a settled transition at progress 1 so offset and transform re-seat
    /// against the new layout without waiting for a real keyboard event.
    pub fn reconcile_content_change(&self) {
        let message_count = self.state.message_count();
        let blank_size_full = self.state.blank_size_full();
        let previous_count = self.seen_message_count.replace(message_count);
        let previous_blank = self.seen_blank_size_full.replace(blank_size_full);

        if !self.visibility.did_show() {
            return;
        }
        let count_changed = message_count != previous_count;
        let blank_changed =
            (blank_size_full - previous_blank).abs() > self.config.content_change_epsilon;
        if !count_changed && !blank_changed {
            return;
        }

        // First content arriving into an empty list gets no offset replay;
        // the scroll position is not meaningful yet and shifting it would
        // flash a jump.
        let bootstrapping = previous_count == 0 && message_count > 0;
        let settle_frame = {
            let session = self.session.borrow();
            KeyboardFrame::open(session.keyboard_height)
        };
        log::debug!(
            "content changed under open keyboard (count {previous_count} -> {message_count}), resettling"
        );
        self.on_start(settle_frame);
        self.on_move_with(settle_frame, false, bootstrapping);
        self.on_end_with(settle_frame, bootstrapping);
    }

    /// The measurement subsystem learned the last user message's layout
    /// position. Completes a deferred scroll-to-end once the position is
    /// known and the message is still the newest.
    pub fn notify_last_message_layout(&self) {
        if !self.session.borrow().do_scroll_to_end {
            return;
        }
        let message = self.state.last_user_message();
        if !message.position_known() || !message.is_newest(self.state.message_count()) {
            return;
        }
        self.session.borrow_mut().do_scroll_to_end = false;
        self.coordinator.reveal_from_closed();
    }

    /// The chat-send workflow dispatched a new user message at `index`.
    ///
    /// Marks the send animation live; with the keyboard at rest this also
    /// starts the reveal path directly, since no keyboard transition will
    /// come along to carry the scroll.
    pub fn notify_message_send(&self, index: i64) {
        self.state.send_animation().set();
        if self.visibility.did_hide() {
            self.coordinator.on_send_while_hidden(index);
        }
    }

    /// Host frame tick; advances the reveal tween when one is active.
    /// Returns whether another tick is needed.
    pub fn on_frame(&self, frame_time_nanos: u64) -> bool {
        self.coordinator.on_frame(frame_time_nanos)
    }

    /// Whether the reveal tween is currently running.
    pub fn is_revealing(&self) -> bool {
        self.coordinator.is_revealing()
    }
}
