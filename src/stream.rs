//! Double-buffer refill state machine.
//!
//! The transfer buffer holds two pixels' worth of duty-cycle codes. While
//! the transfer engine emits one half, the other half is rewritten with the
//! next pixel; after the last pixel two halves of zero codes hold the line
//! low for the protocol's reset period. The state machine is pure data so
//! it can be driven from an interrupt handler or a synchronous test double
//! alike.

use crate::config::PulseCodes;
use crate::encoder::encode_pixel;
use crate::frame::FrameBuffer;

/// Transfer buffer capacity in codes: 4 channels x 8 bits x 2 pixels.
/// 3-channel families use the leading 48 codes.
pub const TRANSFER_CODE_CAP: usize = 4 * 8 * 2;

/// Units of reset tail appended after the last pixel (one per buffer half).
const RESET_UNITS: usize = 2;

/// Transfer lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StreamState {
    /// No transfer in flight; a new one may be seeded.
    Ready,
    /// Codes are being emitted; only the refill callbacks may touch the
    /// transfer buffer.
    Busy,
}

/// Progress of one transfer through the frame buffer.
///
/// The cursor counts pixel units staged into the transfer buffer since the
/// transfer was seeded; values in `pixel_count..pixel_count + 2` are the
/// reset-tail halves. It resets to 0 on the terminal step.
#[derive(Debug)]
pub struct PulseStream {
    buf: [u16; TRANSFER_CODE_CAP],
    half_len: usize,
    pixel_count: usize,
    cursor: usize,
    state: StreamState,
}

impl PulseStream {
    pub fn new(channel_count: usize, pixel_count: usize) -> Self {
        Self {
            buf: [0; TRANSFER_CODE_CAP],
            half_len: channel_count * 8,
            pixel_count,
            cursor: 0,
            state: StreamState::Ready,
        }
    }

    pub const fn state(&self) -> StreamState {
        self.state
    }

    pub const fn is_ready(&self) -> bool {
        matches!(self.state, StreamState::Ready)
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The live code slice handed to the transfer engine.
    pub fn codes(&self) -> &[u16] {
        &self.buf[..self.half_len * 2]
    }

    /// First half of the transfer buffer.
    pub fn front(&self) -> &[u16] {
        &self.buf[..self.half_len]
    }

    /// Second half of the transfer buffer.
    pub fn back(&self) -> &[u16] {
        &self.buf[self.half_len..self.half_len * 2]
    }

    /// Seed both halves from the first two pixels and mark the stream busy.
    ///
    /// For a one-pixel strip the second half wraps back to pixel 0; the
    /// tail sequencing is unchanged.
    pub fn seed<const CAP: usize>(&mut self, frame: &FrameBuffer<CAP>, codes: PulseCodes) {
        let half = self.half_len;
        encode_pixel(frame.pixel(0), codes, &mut self.buf[..half]);
        encode_pixel(frame.pixel(1), codes, &mut self.buf[half..half * 2]);
        self.cursor = 2;
        self.state = StreamState::Busy;
    }

    /// Return to `Ready` without draining; used when the transfer engine
    /// refuses to start.
    pub fn abort(&mut self) {
        self.cursor = 0;
        self.state = StreamState::Ready;
    }

    /// Half-consumed callback: restage the front half.
    ///
    /// Encodes the pixel at the cursor, or zeroes the half once the pixel
    /// data is exhausted (reset tail). Past the tail this is a no-op; the
    /// terminal step belongs to [`Self::fill_back`].
    pub fn fill_front<const CAP: usize>(
        &mut self,
        frame: &FrameBuffer<CAP>,
        codes: PulseCodes,
    ) {
        if self.is_ready() {
            return;
        }
        let half = self.half_len;
        if self.cursor < self.pixel_count {
            encode_pixel(frame.pixel(self.cursor), codes, &mut self.buf[..half]);
            self.cursor += 1;
        } else if self.cursor < self.pixel_count + RESET_UNITS {
            self.buf[..half].fill(0);
            self.cursor += 1;
        }
    }

    /// Full-consumed callback: restage the back half.
    ///
    /// Mirrors [`Self::fill_front`], except that once the pixel data and
    /// both reset-tail halves have drained it resets the cursor, returns
    /// the stream to `Ready` and reports `true` so the caller stops the
    /// transfer engine.
    pub fn fill_back<const CAP: usize>(
        &mut self,
        frame: &FrameBuffer<CAP>,
        codes: PulseCodes,
    ) -> bool {
        if self.is_ready() {
            return false;
        }
        let half = self.half_len;
        if self.cursor < self.pixel_count {
            encode_pixel(
                frame.pixel(self.cursor),
                codes,
                &mut self.buf[half..half * 2],
            );
            self.cursor += 1;
            false
        } else if self.cursor < self.pixel_count + RESET_UNITS {
            self.buf[half..half * 2].fill(0);
            self.cursor += 1;
            false
        } else {
            self.cursor = 0;
            self.state = StreamState::Ready;
            true
        }
    }
}
