//! Joystick-to-UART input event streamer for RP2040.
//!
//! This crate provides the embedded implementation of a small input device:
//! joystick axes multiplexed through an analog switch onto one ADC pin,
//! plus discrete buttons, streamed as 4-byte event frames over UART.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Scans the multiplexed analog channels (settle, sample, release)
//! 2. Smooths, scales, and dead-zones each sample; tracks button edges
//! 3. Queues the resulting events and frames them onto UART (115200 baud)
//!
//! # Hardware Configuration
//!
//! | Function        | GPIO | Description                        |
//! |-----------------|------|------------------------------------|
//! | UART0 TX        | 0    | Event frame output                 |
//! | UART0 RX        | 1    | Unused (link is one-way)           |
//! | Mux address A-C | 2-4  | 74HC4051 channel select            |
//! | Mux inhibit     | 5    | 74HC4051 output gate (active high) |
//! | Buttons         | 14, 15 | Active-low inputs, internal pull-up  |
//! | ADC0            | 26   | Shared analog input the mux feeds  |
//! | LED             | 25   | On-board LED (TX activity)         |
//!
//! # Architecture
//!
//! Three concurrent tasks on the Embassy executor:
//!
//! - **Analog task**: sweeps all multiplexed channels each cycle and
//!   publishes normalized deflections
//! - **Button task**: polls the button pins and publishes edge transitions
//! - **Transmit task**: sole queue consumer, frames events onto the UART
//!
//! The tasks meet only at a bounded [`embassy_sync::channel::Channel`];
//! producers enqueue with a bounded wait and drop on overflow (counted, see
//! [`queue::dropped_events`]), the consumer waits indefinitely.
//!
//! # Modules
//!
//! - [`config`]: compile-time constants (channel counts, calibration, periods)
//! - [`mux`]: multiplexer control lines ([`MuxAddressPins`])
//! - [`adc_input`]: the shared ADC pin ([`MuxedAdc`])
//! - [`buttons`]: button pin bank ([`ButtonInputs`])
//! - [`queue`]: bounded event queue and its drop policy ([`QueueSink`])
//! - [`uart_tx`]: frame transmitter ([`FrameWriter`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints
//!   panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent reset)

#![no_std]

// Re-export pipeline and protocol types for convenience
pub use input_core::{
    AnalogScanner, AnalogSource, AxisCalib, AxisLayout, ButtonScanner, ChannelSelector,
    DigitalSource, EventSink, InputEvent, MovingAverage, MuxPins, SampleError, SinkError,
    SweepStats,
};

pub mod adc_input;
pub mod buttons;
pub mod config;
pub mod mux;
pub mod queue;
pub mod uart_tx;

pub use adc_input::MuxedAdc;
pub use buttons::ButtonInputs;
pub use mux::MuxAddressPins;
pub use queue::{EventQueue, EventReceiver, EventSender, QueueSink};
pub use uart_tx::FrameWriter;
