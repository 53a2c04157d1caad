//! Event sink trait and error types.

use core::future::Future;
use event_proto::InputEvent;

/// Error type for publishing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// The queue stayed full for the whole bounded wait; the event was
    /// dropped. Best-effort by design, not fatal.
    QueueFull,
}

/// Async destination for produced input events.
///
/// The firmware implements this over the shared bounded queue with a
/// bounded-wait enqueue, so a stalled consumer slows producers only briefly
/// and never stalls acquisition outright.
pub trait EventSink {
    /// Publish one event, waiting a bounded time for queue space.
    fn publish(&mut self, event: InputEvent) -> impl Future<Output = Result<(), SinkError>>;
}
