//! Observable numeric output channel.
//!
//! The engine publishes its per-frame offset and transform targets through
//! [`ValueChannel`]s. The rendering layer subscribes with a listener and
//! applies whatever arrives to the scrollable container.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use smallvec::SmallVec;

/// Changes smaller than this do not notify listeners.
const VALUE_EPSILON: f32 = 0.001;

type Listener = (u64, Rc<dyn Fn(f32)>);

/// Observable `f32` target value.
///
/// Cloning is cheap and shares the underlying value and listener list.
///
/// Besides plain `set` notifications, a channel supports [`force_tick`]:
/// re-delivering the *current* value to every listener without changing it.
/// Consumers whose animation runtime only reacts to value changes should
/// treat any notification, changed or not, as a frame to process.
///
/// [`force_tick`]: ValueChannel::force_tick
#[derive(Clone)]
pub struct ValueChannel {
    inner: Rc<ValueChannelInner>,
}

struct ValueChannelInner {
    value: Cell<f32>,
    listeners: RefCell<SmallVec<[Listener; 2]>>,
    next_listener_id: Cell<u64>,
    /// Set when a notification happened with no listeners registered, so a
    /// late subscriber still receives the current value.
    pending: Cell<bool>,
}

impl ValueChannel {
    pub fn new(initial: f32) -> Self {
        Self {
            inner: Rc::new(ValueChannelInner {
                value: Cell::new(initial),
                listeners: RefCell::new(SmallVec::new()),
                next_listener_id: Cell::new(1),
                pending: Cell::new(false),
            }),
        }
    }

    /// Current value.
    pub fn get(&self) -> f32 {
        self.inner.value.get()
    }

    /// Sets the value, notifying listeners when it actually changed.
    pub fn set(&self, value: f32) {
        let previous = self.inner.value.replace(value);
        if (value - previous).abs() > VALUE_EPSILON {
            self.notify(value);
        }
    }

    /// Re-delivers the current value to every listener even though it did
    /// not change.
    pub fn force_tick(&self) {
        self.notify(self.inner.value.get());
    }

    /// Registers a listener and returns its id.
    ///
    /// If a notification fired before any listener existed, the new listener
    /// immediately receives the current value.
    pub fn add_listener(&self, listener: impl Fn(f32) + 'static) -> u64 {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        if self.inner.pending.replace(false) {
            let value = self.inner.value.get();
            let listener = self
                .inner
                .listeners
                .borrow()
                .iter()
                .find(|(listener_id, _)| *listener_id == id)
                .map(|(_, listener)| Rc::clone(listener));
            if let Some(listener) = listener {
                listener(value);
            }
        }
        id
    }

    /// Removes a listener by id.
    pub fn remove_listener(&self, id: u64) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    fn notify(&self, value: f32) {
        let listeners = self.inner.listeners.borrow();
        if listeners.is_empty() {
            self.inner.pending.set(true);
            return;
        }
        for (_, listener) in listeners.iter() {
            listener(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_channel(initial: f32) -> (ValueChannel, Rc<RefCell<Vec<f32>>>) {
        let channel = ValueChannel::new(initial);
        let samples = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&samples);
        channel.add_listener(move |value| sink.borrow_mut().push(value));
        (channel, samples)
    }

    #[test]
    fn set_notifies_only_on_change() {
        let (channel, samples) = recording_channel(0.0);
        channel.set(10.0);
        channel.set(10.0);
        channel.set(10.0004);
        assert_eq!(samples.borrow().as_slice(), &[10.0]);
    }

    #[test]
    fn force_tick_notifies_without_change() {
        let (channel, samples) = recording_channel(5.0);
        channel.force_tick();
        channel.force_tick();
        assert_eq!(samples.borrow().as_slice(), &[5.0, 5.0]);
        assert_eq!(channel.get(), 5.0);
    }

    #[test]
    fn late_listener_receives_pending_value() {
        let channel = ValueChannel::new(0.0);
        channel.set(42.0);
        let samples = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&samples);
        channel.add_listener(move |value| sink.borrow_mut().push(value));
        assert_eq!(samples.borrow().as_slice(), &[42.0]);
    }

    #[test]
    fn removed_listener_no_longer_fires() {
        let channel = ValueChannel::new(0.0);
        let samples = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&samples);
        let id = channel.add_listener(move |value| sink.borrow_mut().push(value));
        channel.set(1.0);
        channel.remove_listener(id);
        channel.set(2.0);
        assert_eq!(samples.borrow().as_slice(), &[1.0]);
    }
}
