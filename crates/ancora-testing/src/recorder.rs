//! Channel notification capture.

use std::cell::RefCell;
use std::rc::Rc;

use ancora_core::ValueChannel;

/// Records every notification a [`ValueChannel`] delivers, force ticks
/// included. Detaches its listener on drop.
pub struct ChannelRecorder {
    channel: ValueChannel,
    listener_id: u64,
    samples: Rc<RefCell<Vec<f32>>>,
}

impl ChannelRecorder {
    pub fn attach(channel: &ValueChannel) -> Self {
        let samples = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&samples);
        let listener_id = channel.add_listener(move |value| sink.borrow_mut().push(value));
        Self {
            channel: channel.clone(),
            listener_id,
            samples,
        }
    }

    /// All recorded notifications, in delivery order.
    pub fn samples(&self) -> Vec<f32> {
        self.samples.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.samples.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.borrow().is_empty()
    }

    pub fn last(&self) -> Option<f32> {
        self.samples.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.samples.borrow_mut().clear();
    }
}

impl Drop for ChannelRecorder {
    fn drop(&mut self) {
        self.channel.remove_listener(self.listener_id);
    }
}
