//! Platform-agnostic input acquisition pipeline.
//!
//! This crate holds everything between the raw hardware capabilities and the
//! event queue, without any platform-specific dependencies. It can be used
//! both in embedded `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! - [`filter`]: fixed-window moving average ([`MovingAverage`])
//! - [`normalize`]: centering, scaling, and dead-zone suppression
//!   ([`AxisCalib`], [`normalize`](normalize::normalize))
//! - [`button`]: edge-triggered button state tracking ([`ButtonTracker`])
//! - [`select`]: analog multiplexer routing protocol ([`ChannelSelector`],
//!   [`MuxPins`])
//! - [`sample`]: capability traits the platform provides ([`AnalogSource`],
//!   [`DigitalSource`])
//! - [`sink`]: where produced events go ([`EventSink`])
//! - [`acquire`]: the per-cycle scan state machines ([`AnalogScanner`],
//!   [`ButtonScanner`])
//!
//! # Data Flow
//!
//! ```text
//! mux select -> raw sample -> moving average -> normalize -+-> EventSink
//!                                  button level -> edge ---+
//! ```
//!
//! The scanners exclusively own all per-channel and per-button state, so no
//! locking is needed anywhere in this crate; the only shared resource in the
//! system is the event queue behind the [`EventSink`] implementation.
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and allocates nothing after
//! initialization.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod acquire;
pub mod button;
pub mod filter;
pub mod normalize;
pub mod sample;
pub mod select;
pub mod sink;

#[cfg(test)]
mod test_util;

pub use acquire::{AnalogScanner, ButtonScanner, SweepStats};
pub use button::ButtonTracker;
pub use filter::MovingAverage;
pub use normalize::AxisCalib;
pub use sample::{AnalogSource, DigitalSource, SampleError};
pub use select::{ChannelSelector, MuxPins};
pub use sink::{EventSink, SinkError};

// Re-export the protocol types the pipeline produces
pub use event_proto::{AxisLayout, InputEvent};
