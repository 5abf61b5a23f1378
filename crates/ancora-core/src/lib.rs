//! Shared state model and host interface for keyboard-aware chat list anchoring.
//!
//! This crate holds everything the keyboard engine and its collaborators
//! exchange:
//! - [`ChatListState`]: the single shared bag of layout-derived scalars
//!   (scroll offset, content height, blank sizes, ...), written by the
//!   measurement subsystem and read by the engine.
//! - [`ValueChannel`]: observable offset/transform targets written by the
//!   engine and consumed by the rendering layer.
//! - [`KeyboardFrame`]: one keyboard lifecycle event sample.
//! - [`ListHost`]: outward calls into the list renderer.
//!
//! All types are single-threaded by design (`Rc`/`Cell`): every mutation is
//! expected to happen on the host's serialized frame-callback queue.

pub mod channel;
pub mod frame;
pub mod host;
pub mod send_animation;
pub mod state;

pub use channel::ValueChannel;
pub use frame::{KeyboardFrame, LastUserMessage, UNMEASURED};
pub use host::{ListHost, ScrollToEndMode};
pub use send_animation::MessageSendAnimation;
pub use state::ChatListState;
