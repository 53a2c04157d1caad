//! Compile-time configuration for the acquisition pipeline.

use input_core::{AxisCalib, AxisLayout};

/// Analog channels routed through the multiplexer (two sticks, X/Y each).
pub const ANALOG_CHANNELS: usize = 4;

/// Discrete button inputs.
pub const BUTTONS: usize = 2;

/// Axis id partition shared with receivers: channels 0-3, buttons 4-5.
pub const AXES: AxisLayout = AxisLayout::new(ANALOG_CHANNELS as u8, BUTTONS as u8);

/// Moving-average window length per analog channel.
pub const FILTER_WINDOW: usize = 5;

/// Calibration applied to every analog channel: 12-bit ADC centered at
/// half scale, mapped to -255..=255 with jitter below 30 suppressed.
pub const CALIB: AxisCalib = AxisCalib {
    center: 2047,
    max_deviation: 2047,
    scale: 255,
    deadzone: 30,
};

/// Full sweep period for the analog task.
pub const ANALOG_SWEEP_PERIOD_MS: u64 = 50;

/// Poll period for the button task. Doubles as the debounce window:
/// contact bounce settles well inside one period.
pub const BUTTON_POLL_PERIOD_MS: u64 = 20;

/// Settling time around multiplexer enable/address transitions.
pub const MUX_SETTLE_US: u32 = 10;

/// Bounded event queue capacity.
pub const EVENT_QUEUE_CAPACITY: usize = 32;

/// How long a producer waits for queue space before dropping an event.
pub const ENQUEUE_TIMEOUT_MS: u64 = 5;

/// Serial link baud rate.
pub const UART_BAUD: u32 = 115_200;
