mod tests {
    use pulse_strip::color::Hsv;
    use pulse_strip::{Error, FrameBuffer, LedFamily, StripConfig};

    const CAP: usize = 64;

    fn config(family: LedFamily, pixel_count: u16, gamma: bool) -> StripConfig {
        StripConfig {
            family,
            pixel_count,
            gamma_correction: gamma,
        }
    }

    #[test]
    fn test_wire_order_grb() {
        let mut frame =
            FrameBuffer::<CAP>::new(config(LedFamily::Ws2812, 4, false)).unwrap();
        frame.set_rgb(0, 1, 2, 3);
        assert_eq!(&frame.as_bytes()[..3], &[2, 1, 3]);
    }

    #[test]
    fn test_wire_order_rgb() {
        let mut frame =
            FrameBuffer::<CAP>::new(config(LedFamily::Ws2811Fast, 4, false)).unwrap();
        frame.set_rgb(0, 1, 2, 3);
        assert_eq!(&frame.as_bytes()[..3], &[1, 2, 3]);
    }

    #[test]
    fn test_gamma_green_blue_only() {
        let mut frame =
            FrameBuffer::<CAP>::new(config(LedFamily::Ws2811Fast, 2, true)).unwrap();
        frame.set_rgb(0, 255, 255, 255);
        // red untouched, green scaled by 0xB0, blue by 0xF0
        assert_eq!(&frame.as_bytes()[..3], &[255, 175, 239]);
    }

    #[test]
    fn test_brightness_applies_before_gamma() {
        let mut frame =
            FrameBuffer::<CAP>::new(config(LedFamily::Ws2811Fast, 2, false)).unwrap();
        frame.set_brightness(127);
        frame.set_rgb(0, 200, 100, 50);
        assert_eq!(&frame.as_bytes()[..3], &[100, 50, 25]);
    }

    #[test]
    fn test_index_wraparound() {
        let mut a = FrameBuffer::<CAP>::new(config(LedFamily::Ws2812, 4, false)).unwrap();
        let mut b = FrameBuffer::<CAP>::new(config(LedFamily::Ws2812, 4, false)).unwrap();
        for k in 0..4 {
            a.set_rgb(k + 4, 10 + k as u8, 20, 30);
            b.set_rgb(k, 10 + k as u8, 20, 30);
        }
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_pixel_read_wraps() {
        let mut frame =
            FrameBuffer::<CAP>::new(config(LedFamily::Ws2812, 4, false)).unwrap();
        frame.set_rgb(1, 9, 8, 7);
        assert_eq!(frame.pixel(5), frame.pixel(1));
    }

    #[test]
    fn test_white_channel() {
        let mut frame =
            FrameBuffer::<CAP>::new(config(LedFamily::Sk6812, 2, false)).unwrap();
        assert_eq!(frame.set_white(0, 100), Ok(()));
        assert_eq!(frame.as_bytes()[3], 100);

        frame.set_brightness(127);
        assert_eq!(frame.set_white(1, 100), Ok(()));
        assert_eq!(frame.as_bytes()[7], 50);
    }

    #[test]
    fn test_white_rejected_on_three_channel_family() {
        let mut frame =
            FrameBuffer::<CAP>::new(config(LedFamily::Ws2812, 2, false)).unwrap();
        assert_eq!(frame.set_white(0, 100), Err(Error::InvalidParam));
        assert_eq!(frame.fill_white(100), Err(Error::InvalidParam));
    }

    #[test]
    fn test_fill_hsv_matches_per_pixel() {
        let color = Hsv {
            hue: 93,
            sat: 201,
            val: 170,
        };
        let mut filled =
            FrameBuffer::<CAP>::new(config(LedFamily::Ws2812, 5, true)).unwrap();
        let mut manual =
            FrameBuffer::<CAP>::new(config(LedFamily::Ws2812, 5, true)).unwrap();

        filled.fill_hsv(color);
        for i in 0..5 {
            manual.set_hsv(i, color);
        }
        assert_eq!(filled.as_bytes(), manual.as_bytes());
    }

    #[test]
    fn test_clear_includes_white() {
        let mut frame =
            FrameBuffer::<CAP>::new(config(LedFamily::Sk6812, 3, false)).unwrap();
        frame.fill_rgb(11, 22, 33);
        frame.fill_white(44).unwrap();
        frame.clear();
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            FrameBuffer::<CAP>::new(config(LedFamily::Ws2812, 0, false)).err(),
            Some(Error::InvalidParam)
        );
        assert_eq!(
            FrameBuffer::<8>::new(config(LedFamily::Ws2812, 3, false)).err(),
            Some(Error::Capacity)
        );
    }
}
