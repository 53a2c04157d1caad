//! Wire protocol types and framing for the input event link.
//!
//! This crate provides everything needed to work with the serial event
//! protocol spoken by the controller firmware:
//!
//! - **Types**: [`InputEvent`] (one axis changed to a new value) and
//!   [`AxisLayout`] (how the axis id space is partitioned between analog
//!   channels and buttons)
//! - **Framing**: [`InputEvent::encode`] / [`InputEvent::decode`] for the
//!   fixed 4-byte frame
//! - **Stream decoding**: [`FrameDecoder`] for receivers reading a raw byte
//!   stream that may join mid-frame
//!
//! # Frame Format
//!
//! Each event is exactly 4 bytes:
//!
//! ```text
//! byte 0: axis id (0..total_axes)
//! byte 1: value, low byte
//! byte 2: value, high byte
//! byte 3: 0xFF delimiter
//! ```
//!
//! The value is a little-endian two's-complement `i16`. Analog axes carry a
//! normalized deviation in `-255..=255`; button axes carry `0` (released) or
//! `1` (pressed). The delimiter doubles as the synchronization marker: a
//! receiver scans for `0xFF`-terminated 4-byte groups to find frame
//! boundaries (see [`FrameDecoder`]).
//!
//! # Example
//!
//! ```
//! use event_proto::{FrameDecoder, InputEvent};
//!
//! let event = InputEvent { axis: 3, value: -120 };
//! let frame = event.encode();
//! assert_eq!(frame, [0x03, 0x88, 0xFF, 0xFF]);
//!
//! let mut decoder = FrameDecoder::new(6);
//! let mut decoded = None;
//! for byte in frame {
//!     decoded = decoder.push(byte);
//! }
//! assert_eq!(decoded, Some(event));
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host tooling and tests)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod event;
pub mod frame;

pub use event::{AxisLayout, InputEvent};
pub use frame::{FrameDecoder, FrameError, FRAME_DELIMITER, FRAME_LEN};
