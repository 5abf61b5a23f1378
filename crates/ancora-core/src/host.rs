//! Outward interface to the list renderer.

/// How a scroll-to-end request should be executed by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollToEndMode {
    /// Jump to the end of the list without animating. Used mid-transition
    /// and when the current position is too stale to animate from.
    Immediate,
    /// Let the renderer drive its own smooth scroll to the end. The engine
    /// itself produces smooth reveals through the offset channel, but hosts
    /// whose renderer owns scrolling can be handed this instead.
    Animated,
}

/// Calls the engine makes back into the list renderer.
///
/// Implementations are invoked on the frame-callback queue. A host that
/// needs another thread (for example to toggle list virtualization state
/// owned by the UI thread) must schedule the hop itself without blocking
/// the caller.
pub trait ListHost {
    /// Enables or disables the renderer's expensive scroll-position
    /// recomputation. Disabled for the duration of a keyboard transition so
    /// per-frame offset writes stay cheap.
    fn set_scroll_processing_enabled(&self, enabled: bool);

    /// Shows or hides the scroll indicator.
    fn set_scroll_indicator_visible(&self, visible: bool);

    /// Requests a scroll to the end of the list.
    fn scroll_to_end(&self, mode: ScrollToEndMode);
}
