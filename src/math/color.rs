/// Converts a packed `0xRRGGBB` color into normalized RGB
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Parses a CSS-style `#rrggbb` string. Returns `None` for anything else.
pub fn rgb_from_hex_str(s: &str) -> Option<[f32; 3]> {
    let digits = s.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(hex_to_rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_white() {
        assert_eq!(hex_to_rgb(0xffffff), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_hex_to_rgb_black() {
        assert_eq!(hex_to_rgb(0x000000), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rgb_from_hex_str_platform_teal() {
        let rgb = rgb_from_hex_str("#86d6d8").unwrap();
        assert!((rgb[0] - 134.0 / 255.0).abs() < 1e-6);
        assert!((rgb[1] - 214.0 / 255.0).abs() < 1e-6);
        assert!((rgb[2] - 216.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_from_hex_str_rejects_malformed() {
        assert!(rgb_from_hex_str("86d6d8").is_none());
        assert!(rgb_from_hex_str("#86d6d").is_none());
        assert!(rgb_from_hex_str("#zzzzzz").is_none());
    }

    #[test]
    fn test_rgb_from_hex_str_rejects_sign() {
        assert!(rgb_from_hex_str("#+86d6d").is_none());
        assert!(rgb_from_hex_str("#-86d6d").is_none());
    }
}
