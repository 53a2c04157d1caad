//! The shared ADC input the multiplexer feeds.

use embassy_rp::adc::{Adc, Async, Channel};
use input_core::{AnalogSource, SampleError};

/// One ADC pin carrying whichever source the multiplexer routes to it.
///
/// Channel selection happens entirely outside this type (see
/// [`MuxAddressPins`](crate::mux::MuxAddressPins)); this is just the
/// conversion itself.
pub struct MuxedAdc {
    adc: Adc<'static, Async>,
    input: Channel<'static>,
}

impl MuxedAdc {
    pub fn new(adc: Adc<'static, Async>, input: Channel<'static>) -> Self {
        Self { adc, input }
    }
}

impl AnalogSource for MuxedAdc {
    async fn read_raw(&mut self) -> Result<u16, SampleError> {
        self.adc
            .read(&mut self.input)
            .await
            .map_err(|_| SampleError::Conversion)
    }
}
