mod tests {
    use pulse_strip::{ChannelOrder, Error, LedFamily, PulseCodes};

    #[test]
    fn test_family_shape() {
        assert_eq!(LedFamily::Ws2812.channel_count(), 3);
        assert_eq!(LedFamily::Sk6812.channel_count(), 4);
        assert_eq!(LedFamily::Ws2812.channel_order(), ChannelOrder::Grb);
        assert_eq!(LedFamily::Ws2811Fast.channel_order(), ChannelOrder::Rgb);
        assert_eq!(LedFamily::Ws2811Slow.bit_rate(), 400_000);
        assert_eq!(LedFamily::Ws2812.bit_rate(), 800_000);
    }

    #[test]
    fn test_derive_ws2811_fast() {
        // 72 MHz / 800 kHz = 90 ticks per period
        let codes = PulseCodes::derive(72_000_000, LedFamily::Ws2811Fast).unwrap();
        assert_eq!(codes.reload, 89);
        assert_eq!(codes.high, 42); // 48% of period
        assert_eq!(codes.low, 17); // 20% of period
        assert_eq!(codes.period_ticks(), 90);
    }

    #[test]
    fn test_derive_ws2812() {
        let codes = PulseCodes::derive(72_000_000, LedFamily::Ws2812).unwrap();
        assert_eq!(codes.reload, 89);
        assert_eq!(codes.high, 75); // 85% of period
        assert_eq!(codes.low, 21); // 25% of period
    }

    #[test]
    fn test_derive_ws2811_slow() {
        // 400 kHz family at the same clock doubles the period
        let codes = PulseCodes::derive(72_000_000, LedFamily::Ws2811Slow).unwrap();
        assert_eq!(codes.reload, 179);
        assert_eq!(codes.high, 152);
        assert_eq!(codes.low, 44);
    }

    #[test]
    fn test_code_invariant_holds() {
        for family in [
            LedFamily::Ws2812,
            LedFamily::Ws2811Fast,
            LedFamily::Ws2811Slow,
            LedFamily::Sk6812,
        ] {
            let codes = PulseCodes::derive(170_000_000, family).unwrap();
            assert!(0 < codes.low);
            assert!(codes.low < codes.high);
            assert!(codes.high < codes.reload);
        }
    }

    #[test]
    fn test_derive_rejects_slow_clocks() {
        assert_eq!(
            PulseCodes::derive(400_000, LedFamily::Ws2812),
            Err(Error::InvalidTiming)
        );
        // 2 ticks per period leaves no room between low and high
        assert_eq!(
            PulseCodes::derive(1_600_000, LedFamily::Ws2812),
            Err(Error::InvalidTiming)
        );
    }
}
