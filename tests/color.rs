mod tests {
    use palette::LinSrgb;
    use smart_leds::RGB8;
    use ws2812_pulse::Color;

    #[test]
    fn test_packed_layout() {
        let color = Color::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_packed(), 0x1234_5678);

        let color = Color::from_packed(0xAABB_CCDD);
        assert_eq!(color.red, 0xAA);
        assert_eq!(color.green, 0xBB);
        assert_eq!(color.blue, 0xCC);
        assert_eq!(color.white, 0xDD);
    }

    #[test]
    fn test_packed_round_trip() {
        for packed in [
            0x0000_0000,
            0xFFFF_FFFF,
            0x1234_5678,
            0xFF00_0000,
            0x00FF_0000,
            0x0000_FF00,
            0x0000_00FF,
            0xDEAD_BEEF,
        ] {
            assert_eq!(Color::from_packed(packed).to_packed(), packed);
        }

        for value in 0..=255u8 {
            let color = Color::new(value, value ^ 0xFF, value / 2, value);
            assert_eq!(Color::from_packed(color.to_packed()), color);
        }
    }

    #[test]
    fn test_rgb_leaves_white_off() {
        assert_eq!(Color::rgb(1, 2, 3), Color::new(1, 2, 3, 0));
        assert_eq!(Color::default(), Color::new(0, 0, 0, 0));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Color::from([1u8, 2, 3]), Color::rgb(1, 2, 3));
        assert_eq!(Color::from([1u8, 2, 3, 4]), Color::new(1, 2, 3, 4));
        assert_eq!(Color::from(RGB8::new(7, 8, 9)), Color::rgb(7, 8, 9));
        assert_eq!(Color::from(LinSrgb::<u8>::new(4, 5, 6)), Color::rgb(4, 5, 6));
    }
}
