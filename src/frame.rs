//! Frame buffer: per-pixel channel bytes in wire order.
//!
//! Writes go through the color pipeline (brightness, gamma, channel
//! reordering) so the stored bytes are exactly what gets encoded onto the
//! wire. Out-of-range indices wrap modulo the pixel count by design.

use heapless::Vec;

use crate::color::{Hsv, Rgb, hsv2rgb};
use crate::config::{ChannelOrder, StripConfig};
use crate::math8::{apply_brightness, scale8};
use crate::Error;

/// Gamma factors for the green and blue channels. Red is deliberately left
/// uncorrected; the asymmetry is protocol-family calibration.
const GREEN_GAMMA: u8 = 0xB0;
const BLUE_GAMMA: u8 = 0xF0;

/// Per-pixel channel byte storage plus the write-time color pipeline.
///
/// `CAP` is the byte capacity; a strip needs `pixel_count * channels`
/// bytes of it.
#[derive(Debug)]
pub struct FrameBuffer<const CAP: usize> {
    bytes: Vec<u8, CAP>,
    config: StripConfig,
    brightness: u8,
}

impl<const CAP: usize> FrameBuffer<CAP> {
    /// Create a zeroed frame buffer for `config`.
    pub fn new(config: StripConfig) -> Result<Self, Error> {
        if config.pixel_count == 0 {
            return Err(Error::InvalidParam);
        }
        let len = usize::from(config.pixel_count) * config.family.channel_count();
        let mut bytes = Vec::new();
        bytes.resize_default(len).map_err(|()| Error::Capacity)?;
        Ok(Self {
            bytes,
            config,
            brightness: 255,
        })
    }

    pub const fn config(&self) -> &StripConfig {
        &self.config
    }

    pub const fn pixel_count(&self) -> usize {
        self.config.pixel_count as usize
    }

    pub const fn channel_count(&self) -> usize {
        self.config.family.channel_count()
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set global brightness. Affects subsequent writes only; already
    /// stored pixels keep their scaled values.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Stored channel bytes, in wire order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Channel bytes of one pixel unit, index wrapped modulo the pixel
    /// count. This is the streaming engine's read path.
    pub fn pixel(&self, unit: usize) -> &[u8] {
        let channels = self.channel_count();
        let offset = (unit % self.pixel_count()) * channels;
        &self.bytes[offset..offset + channels]
    }

    /// Set one pixel from RGB components.
    pub fn set_rgb(&mut self, index: u16, r: u8, g: u8, b: u8) {
        let r = apply_brightness(r, self.brightness);
        let mut g = apply_brightness(g, self.brightness);
        let mut b = apply_brightness(b, self.brightness);

        if self.config.gamma_correction {
            g = scale8(g, GREEN_GAMMA);
            b = scale8(b, BLUE_GAMMA);
        }

        let ordered = match self.config.family.channel_order() {
            ChannelOrder::Grb => [g, r, b],
            ChannelOrder::Rgb => [r, g, b],
        };

        let channels = self.channel_count();
        let offset = (usize::from(index) % self.pixel_count()) * channels;
        self.bytes[offset..offset + 3].copy_from_slice(&ordered);
    }

    /// Set one pixel from an HSV color.
    pub fn set_hsv(&mut self, index: u16, color: Hsv) {
        let Rgb { r, g, b } = hsv2rgb(color);
        self.set_rgb(index, r, g, b);
    }

    /// Set the white channel of one pixel.
    ///
    /// Only valid for 4-channel families; brightness applies, gamma does
    /// not.
    pub fn set_white(&mut self, index: u16, white: u8) -> Result<(), Error> {
        let channels = self.channel_count();
        if channels != 4 {
            return Err(Error::InvalidParam);
        }
        let offset = (usize::from(index) % self.pixel_count()) * channels;
        self.bytes[offset + 3] = apply_brightness(white, self.brightness);
        Ok(())
    }

    /// Fill every pixel with one RGB color.
    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8) {
        for i in 0..self.config.pixel_count {
            self.set_rgb(i, r, g, b);
        }
    }

    /// Fill every pixel with one HSV color.
    ///
    /// The conversion runs once and the RGB result is reused; the output
    /// is identical to calling [`Self::set_hsv`] per pixel.
    pub fn fill_hsv(&mut self, color: Hsv) {
        let Rgb { r, g, b } = hsv2rgb(color);
        self.fill_rgb(r, g, b);
    }

    /// Fill every white channel.
    pub fn fill_white(&mut self, white: u8) -> Result<(), Error> {
        if self.channel_count() != 4 {
            return Err(Error::InvalidParam);
        }
        for i in 0..self.config.pixel_count {
            self.set_white(i, white)?;
        }
        Ok(())
    }

    /// Fill the whole strip with black, white channel included.
    pub fn clear(&mut self) {
        self.fill_rgb(0, 0, 0);
        if self.channel_count() == 4 {
            let _ = self.fill_white(0);
        }
    }
}
