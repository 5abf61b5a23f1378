//! Keyboard-animation state machine and scroll offset engine for chat
//! lists.
//!
//! For every frame of a keyboard transition this crate decides how far to
//! shift the scroll position and content transform so the visually
//! anchored point of the message feed stays stable (or moves
//! intentionally, when a freshly sent message should scroll into view).
//!
//! Structure:
//! - [`geometry`]: pure scalar offset functions.
//! - [`move_resolver`]: one frame's inputs in, offset/transform targets or
//!   a scroll-to-end command out.
//! - [`controller`]: the stateful orchestrator wired to the keyboard
//!   lifecycle callbacks.
//! - [`scroll_to_end`]: immediate jump vs. smooth reveal coordination.
//!
//! The engine never raises user-visible errors: malformed input degrades
//! to "do nothing this frame".

pub mod config;
pub mod constants;
pub mod controller;
pub mod geometry;
pub mod move_resolver;
pub mod scroll_to_end;
pub mod session;

pub use config::KeyboardAvoidanceConfig;
pub use controller::KeyboardAnimationController;
pub use geometry::{is_scroll_far_away, offset_when_closing, offset_when_opening};
pub use move_resolver::{resolve_move, FrameValues, MoveInputs, MoveOutcome};
pub use scroll_to_end::ScrollToEndCoordinator;
pub use session::{AnimationSession, SCROLL_AT_START_UNSET};
