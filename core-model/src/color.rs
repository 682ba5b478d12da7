//! Hex color parsing for widget display customization.

use serde::{Deserialize, Serialize};

/// An opaque RGB color passed through to the vendor SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Neutral fallback used whenever a color string cannot be parsed.
    pub const GRAY: Color = Color {
        r: 0x80,
        g: 0x80,
        b: 0x80,
    };

    /// Parse a color from a hex string of exactly six hex digits, with an
    /// optional leading `#` and surrounding whitespace.
    ///
    /// Malformed input yields [`Color::GRAY`] rather than an error; display
    /// customization is never worth failing a call over.
    pub fn from_hex(raw: &str) -> Color {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Color::GRAY;
        }

        // Length and digit checks above make this parse infallible.
        let rgb = u32::from_str_radix(digits, 16).unwrap_or(0x808080);

        Color {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_six_digit_hex() {
        assert_eq!(
            Color::from_hex("1A2B3C"),
            Color {
                r: 0x1A,
                g: 0x2B,
                b: 0x3C
            }
        );
    }

    #[test]
    fn test_leading_hash_and_whitespace() {
        assert_eq!(
            Color::from_hex("  #ff0000 "),
            Color { r: 255, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Color::from_hex("AbCdEf"), Color::from_hex("abcdef"));
    }

    #[test]
    fn test_malformed_falls_back_to_gray() {
        for raw in ["", "#fff", "12345", "1234567", "zzzzzz", "#12 456", "red"] {
            assert_eq!(Color::from_hex(raw), Color::GRAY, "input: {raw:?}");
        }
    }
}
