//! Debounced message-send animation flag.

use std::cell::Cell;
use std::time::Duration;

use web_time::Instant;

/// Default time after which a stale send flag stops reporting as animating.
pub const DEFAULT_SEND_ANIMATION_TIMEOUT: Duration = Duration::from_millis(500);

/// Tracks whether a "message was just sent" animation is in flight.
///
/// The chat-send workflow calls [`set`] when a send begins; the flag then
/// reports animating until it is explicitly [`clear`]ed or the debounce
/// timeout elapses. The timeout bounds worst-case staleness when the
/// terminal keyboard event that normally clears the flag never arrives.
///
/// [`set`]: MessageSendAnimation::set
/// [`clear`]: MessageSendAnimation::clear
pub struct MessageSendAnimation {
    started: Cell<Option<Instant>>,
    timeout: Cell<Duration>,
}

impl MessageSendAnimation {
    pub fn new() -> Self {
        Self {
            started: Cell::new(None),
            timeout: Cell::new(DEFAULT_SEND_ANIMATION_TIMEOUT),
        }
    }

    /// Marks a send animation as started (or restarts the debounce window).
    pub fn set(&self) {
        self.started.set(Some(Instant::now()));
    }

    /// Clears the flag immediately.
    pub fn clear(&self) {
        self.started.set(None);
    }

    /// Whether a send animation started within the debounce window.
    pub fn is_animating(&self) -> bool {
        match self.started.get() {
            Some(started) => started.elapsed() < self.timeout.get(),
            None => false,
        }
    }

    /// Overrides the debounce timeout.
    pub fn set_timeout(&self, timeout: Duration) {
        self.timeout.set(timeout);
    }
}

impl Default for MessageSendAnimation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_cleared() {
        let flag = MessageSendAnimation::new();
        assert!(!flag.is_animating());
    }

    #[test]
    fn set_then_clear() {
        let flag = MessageSendAnimation::new();
        flag.set();
        assert!(flag.is_animating());
        flag.clear();
        assert!(!flag.is_animating());
    }

    #[test]
    fn zero_timeout_expires_immediately() {
        let flag = MessageSendAnimation::new();
        flag.set_timeout(Duration::ZERO);
        flag.set();
        assert!(!flag.is_animating());
    }
}
