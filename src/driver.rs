//! Caller-facing strip driver.

use crate::config::{PulseCodes, StripConfig};
use crate::frame::FrameBuffer;
use crate::stream::PulseStream;
use crate::{Error, Hsv, TransferEngine};

/// Addressable LED strip driver.
///
/// Owns the frame buffer, the derived pulse codes and the transfer stream;
/// `T` is the hardware transfer primitive. `CAP` is the frame buffer byte
/// capacity (`pixel_count * channels` bytes are used).
///
/// # Caller contract
///
/// [`show`](Self::show) is asynchronous: it seeds the transfer and returns
/// while the strip is still being written. Do not mutate pixels until
/// [`is_ready`](Self::is_ready) reports `true` again; the stream reads one
/// pixel ahead of the wire, so mid-flight writes land in an unspecified
/// half. The two `on_*` callbacks must be wired to the transfer engine's
/// half/full consumption events and complete within one half-buffer
/// transmission period; the refill work is O(channels), independent of
/// strip length.
pub struct StripDriver<T: TransferEngine, const CAP: usize> {
    frame: FrameBuffer<CAP>,
    stream: PulseStream,
    codes: PulseCodes,
    transfer: T,
}

impl<T: TransferEngine, const CAP: usize> StripDriver<T, CAP> {
    /// Create a driver: derives pulse codes from the timer clock and
    /// allocates a zeroed frame buffer.
    pub fn new(config: StripConfig, timer_hz: u32, transfer: T) -> Result<Self, Error> {
        let codes = PulseCodes::derive(timer_hz, config.family)?;
        let frame = FrameBuffer::new(config)?;
        let stream = PulseStream::new(
            config.family.channel_count(),
            usize::from(config.pixel_count),
        );
        Ok(Self {
            frame,
            stream,
            codes,
            transfer,
        })
    }

    pub const fn codes(&self) -> PulseCodes {
        self.codes
    }

    pub const fn frame(&self) -> &FrameBuffer<CAP> {
        &self.frame
    }

    pub const fn stream(&self) -> &PulseStream {
        &self.stream
    }

    pub fn transfer_mut(&mut self) -> &mut T {
        &mut self.transfer
    }

    /// Whether the previous transfer has fully drained, reset tail
    /// included.
    pub fn is_ready(&self) -> bool {
        self.stream.is_ready()
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.frame.set_brightness(brightness);
    }

    pub fn set_rgb(&mut self, index: u16, r: u8, g: u8, b: u8) {
        self.frame.set_rgb(index, r, g, b);
    }

    pub fn set_hsv(&mut self, index: u16, color: Hsv) {
        self.frame.set_hsv(index, color);
    }

    pub fn set_white(&mut self, index: u16, white: u8) -> Result<(), Error> {
        self.frame.set_white(index, white)
    }

    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.frame.fill_rgb(r, g, b);
    }

    pub fn fill_hsv(&mut self, color: Hsv) {
        self.frame.fill_hsv(color);
    }

    pub fn fill_white(&mut self, white: u8) -> Result<(), Error> {
        self.frame.fill_white(white)
    }

    pub fn clear(&mut self) {
        self.frame.clear();
    }

    /// Start emitting the frame buffer onto the wire.
    ///
    /// Returns [`Error::Busy`] while a transfer is in flight (at most one
    /// runs at a time; frame and transfer buffers are left untouched so
    /// the call can simply be retried). A start refusal from the transfer
    /// engine is propagated as [`Error::TransferStart`] with the stream
    /// rolled back to ready. Never blocks.
    pub fn show(&mut self) -> Result<(), Error> {
        if !self.stream.is_ready() || !self.transfer.is_idle() {
            return Err(Error::Busy);
        }

        self.stream.seed(&self.frame, self.codes);
        if self.transfer.start(self.stream.codes()).is_err() {
            self.stream.abort();
            return Err(Error::TransferStart);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("transfer started: {} pixels", self.frame.pixel_count());

        Ok(())
    }

    /// Transfer engine callback: the first buffer half has been emitted.
    pub fn on_half_transfer(&mut self) {
        self.stream.fill_front(&self.frame, self.codes);
    }

    /// Transfer engine callback: the whole buffer has been emitted.
    ///
    /// On the terminal step (pixels and reset tail drained) this stops the
    /// transfer engine and the driver becomes ready again.
    pub fn on_transfer_complete(&mut self) {
        if self.stream.fill_back(&self.frame, self.codes) {
            self.transfer.stop();

            #[cfg(feature = "defmt")]
            defmt::trace!("transfer complete");
        }
    }
}
