//! Strip configuration and pulse timing derivation.
//!
//! The LED family, strip length and gamma switch are one configuration
//! struct resolved at construction; pulse timing is derived once from the
//! timer clock and immutable afterwards.

use crate::Error;

/// Supported one-wire LED protocol families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedFamily {
    /// WS2812/WS2812B, 800 kHz, GRB wire order.
    Ws2812,
    /// WS2811 in fast mode, 800 kHz, RGB wire order.
    Ws2811Fast,
    /// WS2811 in slow mode, 400 kHz, RGB wire order.
    Ws2811Slow,
    /// SK6812 RGBW, 800 kHz, RGB wire order plus a white channel.
    Sk6812,
}

/// Order in which channel bytes go out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelOrder {
    Grb,
    Rgb,
}

impl LedFamily {
    /// Channel bytes per pixel (4 with a white channel, else 3).
    pub const fn channel_count(self) -> usize {
        match self {
            Self::Sk6812 => 4,
            _ => 3,
        }
    }

    pub const fn channel_order(self) -> ChannelOrder {
        match self {
            Self::Ws2812 => ChannelOrder::Grb,
            _ => ChannelOrder::Rgb,
        }
    }

    /// Bit rate on the wire, in pulses per second.
    pub const fn bit_rate(self) -> u32 {
        match self {
            Self::Ws2811Slow => 400_000,
            _ => 800_000,
        }
    }

    /// Duty fractions (high, low) for logical 1 and 0, in percent of the
    /// pulse period. Calibrated per family.
    const fn duty_percent(self) -> (u32, u32) {
        match self {
            Self::Ws2811Fast => (48, 20),
            _ => (85, 25),
        }
    }
}

/// Strip-level configuration, fixed for the lifetime of a driver.
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    pub family: LedFamily,
    /// Number of pixels on the strip. Must be nonzero.
    pub pixel_count: u16,
    /// Scale green by 176/256 and blue by 240/256 on write.
    pub gamma_correction: bool,
}

/// Timer compare values encoding logical 1 and 0 pulses.
///
/// Derived once from the timer input clock; the driver treats these as
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseCodes {
    /// Timer reload value (ticks per pulse period minus one).
    pub reload: u16,
    /// Compare value for a logical 1.
    pub high: u16,
    /// Compare value for a logical 0.
    pub low: u16,
}

impl PulseCodes {
    /// Derive pulse codes from the effective timer clock.
    ///
    /// `timer_hz` is the clock the timer counts at, after any bus
    /// prescaling; the caller reads it from its clock tree. Fails with
    /// [`Error::InvalidTiming`] when the clock is too slow (or too fast)
    /// to satisfy `0 < low < high < reload`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn derive(timer_hz: u32, family: LedFamily) -> Result<Self, Error> {
        let ticks = timer_hz / family.bit_rate();
        if ticks < 2 {
            return Err(Error::InvalidTiming);
        }
        let reload = u16::try_from(ticks - 1).map_err(|_| Error::InvalidTiming)?;

        let (hi_pct, lo_pct) = family.duty_percent();
        let high = (ticks * hi_pct / 100).saturating_sub(1);
        let low = (ticks * lo_pct / 100).saturating_sub(1);

        if low == 0 || low >= high || high >= u32::from(reload) {
            return Err(Error::InvalidTiming);
        }

        Ok(Self {
            reload,
            // Bounded by reload, which fits u16.
            high: high as u16,
            low: low as u16,
        })
    }

    /// Ticks per pulse period.
    pub const fn period_ticks(self) -> u32 {
        self.reload as u32 + 1
    }
}
