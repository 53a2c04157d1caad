//! Analog multiplexer routing protocol.

use embedded_hal_async::delay::DelayNs;

/// Capability trait for the multiplexer's digital control lines.
///
/// Purely deterministic digital output; there is no error path. A selector
/// that fails to settle shows up as noisy samples upstream, not as an error.
pub trait MuxPins {
    /// Drive the address lines to route `channel`.
    fn set_address(&mut self, channel: u8);
    /// Gate the multiplexer output on or off.
    fn set_enabled(&mut self, enabled: bool);
}

/// Routes one of N analog sources to the shared ADC input.
///
/// [`route`](Self::route) follows the fixed ordering: gate the output off,
/// change the address lines, settle, gate on, settle again. Changing the
/// address while the output is live would let the ADC see a transient mix
/// of two channels.
pub struct ChannelSelector<P, D> {
    pins: P,
    delay: D,
    settle_us: u32,
}

impl<P: MuxPins, D: DelayNs> ChannelSelector<P, D> {
    pub fn new(pins: P, delay: D, settle_us: u32) -> Self {
        Self {
            pins,
            delay,
            settle_us,
        }
    }

    /// Route `channel` to the ADC input and wait for it to settle.
    pub async fn route(&mut self, channel: u8) {
        self.pins.set_enabled(false);
        self.pins.set_address(channel);
        self.delay.delay_us(self.settle_us).await;
        self.pins.set_enabled(true);
        self.delay.delay_us(self.settle_us).await;
    }

    /// Gate the output off again after sampling.
    pub fn release(&mut self) {
        self.pins.set_enabled(false);
    }
}
