//! Recording list host.

use std::cell::RefCell;

use ancora_core::{ListHost, ScrollToEndMode};

/// One recorded outward call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    ScrollProcessing(bool),
    IndicatorVisible(bool),
    ScrollToEnd(ScrollToEndMode),
}

/// A [`ListHost`] that records every call for later assertions.
#[derive(Default)]
pub struct RecordingHost {
    calls: RefCell<Vec<HostCall>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls recorded so far, in order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    /// The most recent scroll-to-end request, if any.
    pub fn last_scroll_to_end(&self) -> Option<ScrollToEndMode> {
        self.calls
            .borrow()
            .iter()
            .rev()
            .find_map(|call| match call {
                HostCall::ScrollToEnd(mode) => Some(*mode),
                _ => None,
            })
    }

    /// The most recent scroll-processing toggle, if any.
    pub fn scroll_processing_enabled(&self) -> Option<bool> {
        self.calls
            .borrow()
            .iter()
            .rev()
            .find_map(|call| match call {
                HostCall::ScrollProcessing(enabled) => Some(*enabled),
                _ => None,
            })
    }

    /// Drops all recorded calls.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl ListHost for RecordingHost {
    fn set_scroll_processing_enabled(&self, enabled: bool) {
        self.calls
            .borrow_mut()
            .push(HostCall::ScrollProcessing(enabled));
    }

    fn set_scroll_indicator_visible(&self, visible: bool) {
        self.calls
            .borrow_mut()
            .push(HostCall::IndicatorVisible(visible));
    }

    fn scroll_to_end(&self, mode: ScrollToEndMode) {
        self.calls.borrow_mut().push(HostCall::ScrollToEnd(mode));
    }
}
