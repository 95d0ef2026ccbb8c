//! 8-bit scaling laws used by the color pipeline.
//!
//! Both are exact truncating integer formulas; the low-end behavior
//! (brightness 0 divides by 256) is part of the contract, not an
//! artifact to clean up.

/// Scale an 8-bit value by `scale / 256`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) >> 8) as u8
}

/// Apply global brightness: `value / (256 / (brightness + 1))`.
///
/// The divisor is an integer, so the curve is stepped rather than linear
/// and brightness 0 quenches every input.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn apply_brightness(value: u8, brightness: u8) -> u8 {
    (value as u16 / (256 / (brightness as u16 + 1))) as u8
}
