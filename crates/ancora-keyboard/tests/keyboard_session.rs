//! End-to-end keyboard transition scenarios driven through the scripted
//! harness.

use ancora_core::{KeyboardFrame, LastUserMessage, ScrollToEndMode};
use ancora_testing::prelude::*;

/// Near-bottom chat: 10 messages, content taller than the viewport, scroll
/// anchored at the end.
fn anchored_robot() -> KeyboardRobot {
    let robot = KeyboardRobot::new(300.0);
    robot.seed_messages(10, 2400.0);
    robot.place_at_bottom();
    robot
}

#[test]
fn opening_shifts_offset_and_transform_together() {
    let robot = anchored_robot();
    robot.open_keyboard(4);

    // At the bottom with no blank space the whole transform is carried by
    // the scroll offset: anchor 1656 plus the 300 keyboard shift.
    assert_eq!(robot.transform(), 300.0);
    assert_eq!(robot.offset(), 1956.0);
}

#[test]
fn session_is_rearmed_and_processing_restored_after_end() {
    let robot = anchored_robot();
    robot.open_keyboard(3);

    let session = robot.controller().session();
    assert!(session.is_armed());
    assert_eq!(robot.host().scroll_processing_enabled(), Some(true));

    let calls = robot.host().calls();
    assert!(calls.contains(&HostCall::IndicatorVisible(false)));
    assert_eq!(calls.last(), Some(&HostCall::IndicatorVisible(true)));
}

#[test]
fn closing_returns_transform_to_zero() {
    let robot = anchored_robot();
    robot.open_keyboard(4);
    robot.close_keyboard(4);

    assert_eq!(robot.transform(), 0.0);
    // Full counteraction relative to the close anchor: 1656 - 300.
    assert_eq!(robot.offset(), 1356.0);
    assert!(!robot.controller().is_keyboard_shown());
}

#[test]
fn single_message_list_disables_the_session() {
    let robot = KeyboardRobot::new(300.0);
    robot.seed_messages(1, 80.0);
    robot.open_keyboard(4);

    assert_eq!(robot.transform(), 0.0);
    assert!(!robot
        .host()
        .calls()
        .contains(&HostCall::ScrollProcessing(false)));
}

#[test]
fn moves_before_any_start_are_ignored() {
    let robot = KeyboardRobot::new(300.0);
    robot.seed_messages(10, 2400.0);
    robot
        .controller()
        .on_move(KeyboardFrame::at(0.5, 150.0, 300.0));

    assert_eq!(robot.offset(), 0.0);
    assert_eq!(robot.transform(), 0.0);
}

#[test]
fn interactive_drag_pins_offset_and_force_ticks() {
    let robot = anchored_robot();
    // Enough resting blank space to absorb the whole transform, so the
    // dismissal has no offset of its own to apply.
    robot.state().set_blank_size_full(320.0);
    robot.open_keyboard(2);

    let offsets = ChannelRecorder::attach(robot.controller().offset_channel());
    // Attaching drains the channel's pending notification from the open.
    offsets.clear();
    robot.drag_dismiss(&[0.9, 0.6, 0.3]);

    // Three pinned frames, re-delivered unchanged via force ticks.
    assert_eq!(offsets.len(), 3);
    let samples = offsets.samples();
    assert!(samples.windows(2).all(|pair| pair[0] == pair[1]));

    assert!((robot.transform() - 90.0).abs() < 1e-3);
    robot.finish_drag_dismiss();
    assert!(!robot.controller().session().did_interactive);
}

#[test]
fn spurious_interactive_end_event_changes_nothing() {
    let robot = anchored_robot();
    robot.open_keyboard(2);
    robot.drag_dismiss(&[0.8, 0.5]);

    let session_before = robot.controller().session();
    let calls_before = robot.host().calls();
    let offset_before = robot.offset();
    let transform_before = robot.transform();

    // progress 0 with a nonzero target: the duplicate-fire artifact.
    robot
        .controller()
        .on_end(KeyboardFrame::at(0.0, 0.0, 300.0));

    assert_eq!(robot.controller().session(), session_before);
    assert_eq!(robot.host().calls(), calls_before);
    assert_eq!(robot.offset(), offset_before);
    assert_eq!(robot.transform(), transform_before);

    robot.finish_drag_dismiss();
    assert!(robot.controller().session().is_armed());
}

#[test]
fn send_animation_rides_scroll_toward_message_position() {
    let robot = anchored_robot();
    robot.open_keyboard(2);
    robot
        .state()
        .set_last_user_message(LastUserMessage::new(9, 1800.0));
    robot.send_message(9);

    let height = 300.0;
    robot.controller().on_start(KeyboardFrame::close(height));
    robot
        .controller()
        .on_move(KeyboardFrame::at(0.5, 150.0, 0.0));
    // Halfway closed: anchor 1656 plus half the 144 px gap to the message.
    assert_eq!(robot.offset(), 1728.0);
    assert_eq!(robot.transform(), 150.0);

    robot.controller().on_end(KeyboardFrame::close(height));
    assert!(!robot.state().send_animation().is_animating());
    assert!(robot.controller().session().is_armed());
}

#[test]
fn send_keeps_scroll_processing_enabled_during_transition() {
    let robot = anchored_robot();
    robot.open_keyboard(2);
    robot.host().clear();
    robot.send_message(9);

    robot.controller().on_start(KeyboardFrame::close(300.0));
    assert!(!robot
        .host()
        .calls()
        .contains(&HostCall::ScrollProcessing(false)));
}

#[test]
fn send_far_from_bottom_jumps_to_end_mid_close() {
    let robot = KeyboardRobot::new(300.0);
    robot.seed_messages(10, 5000.0);
    robot.state().set_scroll_offset(100.0);
    robot.open_keyboard(2);
    let offset_after_open = robot.offset();

    robot.send_message(9);
    robot.close_keyboard(4);

    assert_eq!(
        robot.host().last_scroll_to_end(),
        Some(ScrollToEndMode::Immediate)
    );
    assert!(robot.controller().session().do_scroll_to_end);
    // All offset application is suspended while the jump is pending.
    assert_eq!(robot.offset(), offset_after_open);
}

#[test]
fn deferred_scroll_to_end_waits_for_layout_of_newest_message() {
    let robot = KeyboardRobot::new(300.0);
    robot.seed_messages(10, 2400.0);
    robot.state().set_scroll_offset(1500.0);
    robot.open_keyboard(2);
    robot.send_message(9);
    robot.close_keyboard(4);
    assert!(robot.controller().session().do_scroll_to_end);

    // A stale, non-newest message does not complete the request.
    robot.measure_last_message(7, 1100.0);
    assert!(robot.controller().session().do_scroll_to_end);

    robot.measure_last_message(9, 1800.0);
    assert!(!robot.controller().session().do_scroll_to_end);
    assert!(robot.controller().is_revealing());

    let frames = robot.drive_reveal(16_000_000, 60);
    assert!(frames < 60, "reveal should finish within 350ms of frames");
    assert!(!robot.controller().is_revealing());
    // Clamped to the end of the scrollable range.
    assert_eq!(robot.offset(), 1656.0);
}

#[test]
fn send_while_hidden_near_bottom_starts_reveal_tween() {
    let robot = KeyboardRobot::new(300.0);
    robot.seed_messages(10, 2400.0);
    robot.state().set_scroll_offset(1500.0);

    robot.send_message(9);
    assert!(robot.controller().is_revealing());
    robot.drive_reveal(16_000_000, 60);
    assert_eq!(robot.offset(), 1656.0);

    // An older index never supersedes the tracked newest message.
    robot.send_message(8);
    assert!(!robot.controller().is_revealing());
}

#[test]
fn send_while_hidden_far_from_bottom_jumps() {
    let robot = KeyboardRobot::new(300.0);
    robot.seed_messages(20, 5000.0);
    robot.state().set_scroll_offset(0.0);

    robot.send_message(19);
    assert!(!robot.controller().is_revealing());
    assert_eq!(
        robot.host().last_scroll_to_end(),
        Some(ScrollToEndMode::Immediate)
    );
}

#[test]
fn content_change_under_open_keyboard_resettles() {
    let robot = anchored_robot();
    robot.open_keyboard(2);
    assert!(robot.controller().is_keyboard_shown());
    robot.host().clear();

    robot.state().set_message_count(11);
    robot.state().set_content_height(2600.0);
    robot.controller().reconcile_content_change();

    // A full synthetic transition ran: processing toggled off and back on.
    let calls = robot.host().calls();
    assert!(calls.contains(&HostCall::ScrollProcessing(false)));
    assert_eq!(robot.host().scroll_processing_enabled(), Some(true));
    assert_eq!(robot.transform(), 300.0);
    assert!(robot.controller().is_keyboard_shown());
}

#[test]
fn content_wobble_below_epsilon_is_ignored() {
    let robot = anchored_robot();
    robot.open_keyboard(2);
    robot.host().clear();

    robot.state().set_blank_size_full(0.4);
    robot.controller().reconcile_content_change();

    assert!(robot.host().calls().is_empty());
}

#[test]
fn reconciliation_never_interleaves_with_a_live_transition() {
    let robot = anchored_robot();
    // Transition started but not settled: trackers disagree.
    robot.controller().on_start(KeyboardFrame::open(300.0));
    robot.host().clear();

    robot.state().set_message_count(12);
    robot.controller().reconcile_content_change();

    assert!(robot.host().calls().is_empty());
}

#[test]
fn first_content_arrival_skips_the_offset_replay() {
    let robot = KeyboardRobot::new(300.0);
    // Keyboard settles open over an empty list (session disabled, but the
    // visibility trackers still follow the keyboard).
    robot.open_keyboard(1);
    assert!(robot.controller().is_keyboard_shown());

    let offset_before = robot.offset();
    robot.seed_messages(5, 900.0);

    assert_eq!(robot.offset(), offset_before);
}
