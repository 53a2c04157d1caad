//! 74HC4051 multiplexer control lines.

use embassy_rp::gpio::Output;
use input_core::MuxPins;

/// The mux's three address lines plus the inhibit (output gate) line.
///
/// Address bit `n` maps to `address[n]`. The inhibit line is active high:
/// driving it high cuts the analog output, so "enabled" means inhibit low.
pub struct MuxAddressPins {
    address: [Output<'static>; 3],
    inhibit: Output<'static>,
}

impl MuxAddressPins {
    pub fn new(address: [Output<'static>; 3], inhibit: Output<'static>) -> Self {
        Self { address, inhibit }
    }
}

impl MuxPins for MuxAddressPins {
    fn set_address(&mut self, channel: u8) {
        for (bit, pin) in self.address.iter_mut().enumerate() {
            if channel & (1 << bit) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.inhibit.set_low();
        } else {
            self.inhibit.set_high();
        }
    }
}
