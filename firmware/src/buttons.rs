//! Button pin bank.

use embassy_rp::gpio::Input;
use input_core::DigitalSource;

/// The configured button pins, active-low with internal pull-ups.
pub struct ButtonInputs<const B: usize> {
    pins: [Input<'static>; B],
}

impl<const B: usize> ButtonInputs<B> {
    pub fn new(pins: [Input<'static>; B]) -> Self {
        Self { pins }
    }
}

impl<const B: usize> DigitalSource for ButtonInputs<B> {
    fn is_low(&mut self, index: usize) -> bool {
        self.pins[index].is_low()
    }
}
