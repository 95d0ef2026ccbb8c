#![no_std]

//! Double-buffered PWM bitstream driver for one-wire addressable LEDs
//! (WS2812/WS2811/SK6812 families).
//!
//! The transfer buffer holds exactly two pixels' worth of duty-cycle codes.
//! A hardware transfer engine cycles it continuously and reports half/full
//! consumption; the driver refills the half just consumed from the next
//! pixel in the frame buffer, then appends two halves of reset pulses
//! before stopping the engine.

pub mod color;
pub mod config;
pub mod driver;
pub mod encoder;
pub mod frame;
pub mod math8;
pub mod shared;
pub mod stream;

pub use color::{Hsv, Rgb, hsv2rgb};
pub use config::{ChannelOrder, LedFamily, PulseCodes, StripConfig};
pub use driver::StripDriver;
pub use frame::FrameBuffer;
pub use shared::Shared;
pub use stream::{PulseStream, StreamState};

/// Errors returned by the driver API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Operation is not valid for the configured LED family.
    InvalidParam,
    /// A transfer is already in flight; poll readiness and retry.
    Busy,
    /// The transfer engine refused to start.
    TransferStart,
    /// The derived pulse codes violate `0 < low < high < reload`.
    InvalidTiming,
    /// The strip does not fit the frame buffer capacity.
    Capacity,
}

/// Error returned when the transfer engine cannot begin emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransferStartError;

/// Continuous-output hardware transfer primitive.
///
/// Implement this trait to support different hardware platforms: a timer
/// compare channel fed by circular DMA, a timer-interrupt shift loop, or a
/// test double that invokes the driver callbacks synchronously.
///
/// # Contract
///
/// `start` latches the location of `codes` and re-emits the region at the
/// fixed pulse period until `stop` is called, treating it as circular. The
/// implementation must arrange for [`StripDriver::on_half_transfer`] to run
/// each time the first half has been consumed and
/// [`StripDriver::on_transfer_complete`] each time the whole buffer has.
/// The driver keeps the buffer alive for the duration of the transfer and
/// rewrites only the half that was just consumed.
///
/// [`StripDriver::on_half_transfer`]: crate::driver::StripDriver::on_half_transfer
/// [`StripDriver::on_transfer_complete`]: crate::driver::StripDriver::on_transfer_complete
pub trait TransferEngine {
    /// Begin continuous circular emission of `codes`.
    fn start(&mut self, codes: &[u16]) -> Result<(), TransferStartError>;

    /// Stop emission. The line must rest low afterwards.
    fn stop(&mut self);

    /// Whether the engine is idle and can accept a new `start`.
    fn is_idle(&self) -> bool;
}
