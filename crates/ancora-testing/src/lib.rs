//! Testing utilities and scripted keyboard harness for ancora.
//!
//! Provides a robot-style API for exercising the keyboard engine without a
//! real keyboard event source:
//! - [`KeyboardRobot`]: drives scripted open/close/interactive transitions
//!   against a fully wired controller.
//! - [`RecordingHost`]: a [`ListHost`](ancora_core::ListHost) that records
//!   every outward call.
//! - [`ChannelRecorder`]: captures channel notifications, force ticks
//!   included.

pub mod host;
pub mod recorder;
pub mod robot;

pub use host::{HostCall, RecordingHost};
pub use recorder::ChannelRecorder;
pub use robot::KeyboardRobot;

pub mod prelude {
    pub use crate::host::{HostCall, RecordingHost};
    pub use crate::recorder::ChannelRecorder;
    pub use crate::robot::KeyboardRobot;
}
