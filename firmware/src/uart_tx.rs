//! Serial frame transmitter.

use embassy_rp::uart::{Async, Error, UartTx};
use input_core::InputEvent;

/// Writes each event as one 4-byte frame onto the UART TX half.
pub struct FrameWriter {
    tx: UartTx<'static, Async>,
}

impl FrameWriter {
    pub fn new(tx: UartTx<'static, Async>) -> Self {
        Self { tx }
    }

    /// Encode and transmit one event.
    ///
    /// The transport is assumed always ready at this baud rate; an error
    /// here means the link itself is broken, which the caller treats as
    /// fatal.
    pub async fn send(&mut self, event: &InputEvent) -> Result<(), Error> {
        self.tx.write(&event.encode()).await
    }
}
