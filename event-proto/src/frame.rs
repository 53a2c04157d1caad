//! Fixed 4-byte wire framing and stream resynchronization.

use crate::event::InputEvent;

/// Length of a wire frame in bytes.
pub const FRAME_LEN: usize = 4;

/// Frame delimiter, last byte of every frame.
pub const FRAME_DELIMITER: u8 = 0xFF;

/// Error type for frame decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Last byte of the frame is not the delimiter.
    Delimiter,
}

impl InputEvent {
    /// Encode this event as a wire frame.
    ///
    /// The value is written little-endian.
    #[inline]
    #[must_use]
    pub fn encode(&self) -> [u8; FRAME_LEN] {
        let value = self.value.to_le_bytes();
        [self.axis, value[0], value[1], FRAME_DELIMITER]
    }

    /// Decode a wire frame back into an event.
    ///
    /// Only validates the delimiter; callers reading from a raw byte stream
    /// should use [`FrameDecoder`], which also resynchronizes.
    pub fn decode(frame: &[u8; FRAME_LEN]) -> Result<Self, FrameError> {
        if frame[3] != FRAME_DELIMITER {
            return Err(FrameError::Delimiter);
        }
        Ok(Self {
            axis: frame[0],
            value: i16::from_le_bytes([frame[1], frame[2]]),
        })
    }
}

/// Incremental decoder for a raw frame byte stream.
///
/// Feed bytes with [`push`](Self::push); a decoded event is returned whenever
/// a complete frame is recognized. A receiver that joins mid-stream (or loses
/// bytes) resynchronizes by scanning for a delimiter-terminated 4-byte group
/// whose axis id is plausible for the configured layout. Value bytes may
/// legitimately be `0xFF`, so the delimiter alone does not identify a frame
/// boundary; the axis check resolves the common misalignments.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    buf: [u8; FRAME_LEN],
    len: usize,
    total_axes: u8,
}

impl FrameDecoder {
    /// Create a decoder for a stream using `total_axes` axis ids.
    #[must_use]
    pub const fn new(total_axes: u8) -> Self {
        Self {
            buf: [0; FRAME_LEN],
            len: 0,
            total_axes,
        }
    }

    /// Feed one byte; returns a decoded event when a frame completes.
    pub fn push(&mut self, byte: u8) -> Option<InputEvent> {
        self.buf[self.len] = byte;
        self.len += 1;
        if self.len < FRAME_LEN {
            return None;
        }

        match InputEvent::decode(&self.buf) {
            Ok(event) if event.axis < self.total_axes => {
                self.len = 0;
                Some(event)
            }
            // Misaligned: drop the oldest byte and keep scanning.
            _ => {
                self.buf.copy_within(1.., 0);
                self.len = FRAME_LEN - 1;
                None
            }
        }
    }

    /// Discard any partially accumulated frame.
    pub fn reset(&mut self) {
        self.len = 0;
    }
}
