//! Tween support for the chat list scroll reveal.
//!
//! Time-based interpolation with easing curves, driven by host frame
//! timestamps. The keyboard engine uses this for the smooth scroll that
//! reveals a freshly sent message while the keyboard is closed; everything
//! richer (springs, decay, keyframes) belongs to the host's own animation
//! runtime.

pub mod easing;
pub mod tween;

pub use easing::{Easing, Lerp};
pub use tween::{AnimationSpec, TweenAnimation};
