//! Color types and the integer HSV to RGB conversion.

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Convert HSV to RGB with pure integer math.
///
/// Hue is split into six 43-wide sectors. The truncating `p`/`q`/`t`
/// formulas are part of the output contract; do not replace them with a
/// float or rainbow-mapped conversion.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv2rgb(color: Hsv) -> Rgb {
    if color.sat == 0 {
        return Rgb::new(color.val, color.val, color.val);
    }

    let sector = color.hue / 43;
    let rem = u16::from(color.hue - sector * 43) * 6;

    let sat = u16::from(color.sat);
    let val = u16::from(color.val);

    let p = ((val * (255 - sat)) >> 8) as u8;
    let q = ((val * (255 - ((sat * rem) >> 8))) >> 8) as u8;
    let t = ((val * (255 - ((sat * (255 - rem)) >> 8))) >> 8) as u8;
    let val = color.val;

    match sector {
        0 => Rgb::new(val, t, p),
        1 => Rgb::new(q, val, p),
        2 => Rgb::new(p, val, t),
        3 => Rgb::new(p, q, val),
        4 => Rgb::new(t, p, val),
        _ => Rgb::new(val, p, q),
    }
}
