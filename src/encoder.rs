//! Bit encoder: channel bytes to duty-cycle codes.

use crate::config::PulseCodes;

/// Encode one byte into 8 duty-cycle codes, most significant bit first.
#[inline]
pub const fn encode_byte(byte: u8, high: u16, low: u16) -> [u16; 8] {
    let mut codes = [0u16; 8];
    let mut i = 0;
    while i < 8 {
        codes[i] = if (byte << i) & 0x80 != 0 { high } else { low };
        i += 1;
    }
    codes
}

/// Encode one pixel's channel bytes into `out`, 8 codes per byte.
///
/// `out` must hold `pixel.len() * 8` codes.
pub fn encode_pixel(pixel: &[u8], codes: PulseCodes, out: &mut [u16]) {
    for (chunk, &byte) in out.chunks_exact_mut(8).zip(pixel) {
        chunk.copy_from_slice(&encode_byte(byte, codes.high, codes.low));
    }
}
