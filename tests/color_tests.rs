//! Integration tests for hex decoding and color blending

mod common;
use common::*;

use gradient_animator::{Color, ColorError, blend};
use proptest::collection::SizeRange;
use proptest::prelude::*;

#[test]
fn decode_is_case_insensitive() {
    assert_eq!(Color::from_hex("AbCdEf"), Color::from_hex("abcdef"));
    assert_eq!(Color::from_hex("ABCDEF"), Ok(Color(0xFFABCDEF)));
}

#[test]
fn decode_red_and_blue() {
    assert_eq!(Color::from_hex("ff0000"), Ok(RED));
    assert_eq!(Color::from_hex("0000ff"), Ok(BLUE));
    assert_eq!(Color::from_hex("ff00ff00"), Ok(GREEN));
}

#[test]
fn red_to_blue_halfway() {
    let mid = blend(RED, BLUE, 1, 2);
    assert_eq!(mid.alpha(), 0xFF);
    assert!(mid.red() == 127 || mid.red() == 128);
    assert_eq!(mid.green(), 0);
    assert!(mid.blue() == 127 || mid.blue() == 128);
}

fn hex_string(len: impl Into<SizeRange>) -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('0', '9'),
            proptest::char::range('a', 'f'),
            proptest::char::range('A', 'F'),
        ],
        len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn six_digit_colors_are_opaque(text in hex_string(6)) {
        let color = Color::from_hex(&text).unwrap();
        prop_assert_eq!(color.alpha(), 0xFF);
        prop_assert_eq!(color.0 & 0x00FF_FFFF, u32::from_str_radix(&text, 16).unwrap());
    }

    #[test]
    fn eight_digit_channels_follow_aarrggbb(text in hex_string(8)) {
        let color = Color::from_hex(&text).unwrap();
        let byte = |i: usize| u8::from_str_radix(&text[i..i + 2], 16).unwrap();
        prop_assert_eq!(color.alpha(), byte(0));
        prop_assert_eq!(color.red(), byte(2));
        prop_assert_eq!(color.green(), byte(4));
        prop_assert_eq!(color.blue(), byte(6));
    }

    #[test]
    fn other_lengths_fail(
        text in hex_string(0..12usize).prop_filter("not 6 or 8", |s| s.len() != 6 && s.len() != 8),
    ) {
        prop_assert_eq!(
            Color::from_hex(&text),
            Err(ColorError::InvalidLength { len: text.len() })
        );
    }

    #[test]
    fn non_hex_characters_fail(
        text in hex_string(8),
        position in 0usize..8,
        bad in "[g-zG-Z#x ]",
    ) {
        let mut corrupted = text.clone();
        corrupted.replace_range(position..position + 1, &bad);
        prop_assert_eq!(Color::from_hex(&corrupted), Err(ColorError::InvalidDigit));
        prop_assert!(Color::from_hex(&corrupted[..6]).is_err() || position >= 6);
    }

    #[test]
    fn blending_a_color_with_itself_is_identity(
        value in any::<u32>().prop_filter("visible", |v| v >> 24 != 0),
        step in 0u32..64,
        total in 1u32..64,
    ) {
        let color = Color(value);
        prop_assert_eq!(blend(color, color, step, total), color);
    }

    #[test]
    fn endpoints_are_exact(from in any::<u32>(), to in any::<u32>(), total in 1u32..1000) {
        prop_assert_eq!(blend(Color(from), Color(to), 0, total), Color(from));
        prop_assert_eq!(blend(Color(from), Color(to), total, total), Color(to));
    }

    #[test]
    fn blending_is_monotonic_without_overshoot(
        from in any::<u32>(),
        to in any::<u32>(),
        total in 1u32..200,
    ) {
        let (from, to) = (Color(from), Color(to));
        let channels = |c: Color| [c.red(), c.green(), c.blue()];
        let mut previous = channels(from);
        for step in 1..=total {
            let current = channels(blend(from, to, step, total));
            for i in 0..3 {
                let (a, b) = (channels(from)[i], channels(to)[i]);
                prop_assert!(current[i] >= a.min(b) && current[i] <= a.max(b));
                if b >= a {
                    prop_assert!(current[i] >= previous[i]);
                } else {
                    prop_assert!(current[i] <= previous[i]);
                }
            }
            previous = current;
        }
    }
}
