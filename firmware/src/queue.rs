//! The bounded event queue and its backpressure policy.
//!
//! The queue is the only shared mutable resource in the system: both
//! acquisition tasks produce into it, the transmit task is the sole
//! consumer. Delivery is strictly FIFO across producers. Producers enqueue
//! with a bounded wait and drop on overflow — best-effort by design, since
//! a stalled consumer must never stall acquisition — but every drop is
//! counted so the condition stays observable.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{with_timeout, Duration};
use input_core::{EventSink, InputEvent, SinkError};
use portable_atomic::{AtomicU32, Ordering};

use crate::config::{ENQUEUE_TIMEOUT_MS, EVENT_QUEUE_CAPACITY};

/// The inter-task event queue.
pub type EventQueue = Channel<CriticalSectionRawMutex, InputEvent, EVENT_QUEUE_CAPACITY>;

/// Producer handle for an acquisition task.
pub type EventSender = Sender<'static, CriticalSectionRawMutex, InputEvent, EVENT_QUEUE_CAPACITY>;

/// Consumer handle for the transmit task.
pub type EventReceiver =
    Receiver<'static, CriticalSectionRawMutex, InputEvent, EVENT_QUEUE_CAPACITY>;

/// Events dropped because the queue stayed full for the whole bounded wait.
static DROPPED_EVENTS: AtomicU32 = AtomicU32::new(0);

/// Total events dropped under backpressure since boot.
pub fn dropped_events() -> u32 {
    DROPPED_EVENTS.load(Ordering::Relaxed)
}

/// [`EventSink`] adapter over a queue sender: bounded-wait enqueue,
/// drop-on-timeout.
pub struct QueueSink {
    sender: EventSender,
}

impl QueueSink {
    pub fn new(sender: EventSender) -> Self {
        Self { sender }
    }
}

impl EventSink for QueueSink {
    async fn publish(&mut self, event: InputEvent) -> Result<(), SinkError> {
        let enqueue = self.sender.send(event);
        match with_timeout(Duration::from_millis(ENQUEUE_TIMEOUT_MS), enqueue).await {
            Ok(()) => Ok(()),
            Err(_) => {
                DROPPED_EVENTS.fetch_add(1, Ordering::Relaxed);
                Err(SinkError::QueueFull)
            }
        }
    }
}
