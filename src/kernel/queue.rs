//! Timed render events arriving from another thread.

use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};

use crate::kernel::event::RenderEvent;
use crate::params::ParamAddress;

/// Upper bound on events applied inside one queued render call.
///
/// Events beyond this stay in the source and land at the start of the next
/// buffer.
pub const MAX_QUEUED_EVENTS: usize = 256;

/// Something the render thread can pull time-ordered events from.
pub trait EventSource {
    /// Next event scheduled strictly before `end_time`, if any.
    fn pop_before(&mut self, end_time: i64) -> Option<RenderEvent>;
}

#[cfg(feature = "rtrb")]
impl EventSource for Consumer<RenderEvent> {
    fn pop_before(&mut self, end_time: i64) -> Option<RenderEvent> {
        let ready = matches!(self.peek(), Ok(event) if event.sample_time() < end_time);
        if ready {
            self.pop().ok()
        } else {
            None
        }
    }
}

/// Offline sources (tests, file rendering).
impl EventSource for VecDeque<RenderEvent> {
    fn pop_before(&mut self, end_time: i64) -> Option<RenderEvent> {
        match self.front() {
            Some(event) if event.sample_time() < end_time => self.pop_front(),
            _ => None,
        }
    }
}

/// Control-thread side of an event queue.
#[cfg(feature = "rtrb")]
pub struct EventSender {
    tx: Producer<RenderEvent>,
}

#[cfg(feature = "rtrb")]
impl EventSender {
    /// Queue an event. Returns `false` when the queue is full.
    ///
    /// Events must be pushed in ascending `sample_time` order.
    pub fn send(&mut self, event: RenderEvent) -> bool {
        self.tx.push(event).is_ok()
    }

    pub fn set_parameter_at(&mut self, sample_time: i64, address: ParamAddress, value: f32) -> bool {
        self.send(RenderEvent::parameter(sample_time, address, value))
    }

    pub fn slots(&self) -> usize {
        self.tx.slots()
    }
}

/// Render-thread side of an event queue.
#[cfg(feature = "rtrb")]
pub type EventReceiver = Consumer<RenderEvent>;

/// Create a lock-free single-producer single-consumer event queue.
#[cfg(feature = "rtrb")]
pub fn event_queue(capacity: usize) -> (EventSender, EventReceiver) {
    let (tx, rx) = RingBuffer::<RenderEvent>::new(capacity);
    (EventSender { tx }, rx)
}
