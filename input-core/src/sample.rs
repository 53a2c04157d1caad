//! Capability traits for the platform's sampling hardware.
//!
//! The acquisition pipeline never touches registers; the platform adaptation
//! layer implements these traits and the pipeline stays unit-testable on
//! host with mock implementations.

use core::future::Future;

/// Error type for raw sample acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// ADC conversion failed.
    Conversion,
}

/// Async source of raw samples from the ADC input the multiplexer feeds.
///
/// The caller routes a channel first (see
/// [`ChannelSelector`](crate::select::ChannelSelector)); the source itself
/// only ever reads the one shared pin.
pub trait AnalogSource {
    /// Perform one conversion and return the raw unsigned sample.
    fn read_raw(&mut self) -> impl Future<Output = Result<u16, SampleError>>;
}

/// Source of logical levels for the configured button pins.
pub trait DigitalSource {
    /// Whether button `index`'s pin currently reads low.
    ///
    /// Buttons are wired active-low, so `true` means pressed.
    fn is_low(&mut self, index: usize) -> bool;
}
