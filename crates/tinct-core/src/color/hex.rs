//! Strict hex color parsing (`#rgb` / `#rrggbb`)

use super::rgb::Color;
use crate::error::{TinctError, TinctResult};

/// Parse a hex color into 8-bit channels.
///
/// Accepts exactly 3 or 6 hex digits, case-insensitive, with an optional
/// single leading `#`. Shorthand digits are doubled (`#abc` == `#aabbcc`).
/// Surrounding whitespace is not tolerated.
pub fn parse_hex(input: &str) -> TinctResult<[u8; 3]> {
    let invalid = || TinctError::InvalidHex {
        input: input.to_string(),
    };

    let digits = input.strip_prefix('#').unwrap_or(input).as_bytes();
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(invalid());
    }

    match digits.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (channel, &digit) in rgb.iter_mut().zip(digits) {
                let nibble = hex_value(digit);
                *channel = nibble << 4 | nibble;
            }
            Ok(rgb)
        }
        6 => {
            let mut rgb = [0u8; 3];
            for (channel, pair) in rgb.iter_mut().zip(digits.chunks_exact(2)) {
                *channel = hex_value(pair[0]) << 4 | hex_value(pair[1]);
            }
            Ok(rgb)
        }
        _ => Err(invalid()),
    }
}

/// Check whether a string is an acceptable hex color without allocating.
pub fn is_valid_hex(input: &str) -> bool {
    let digits = input.strip_prefix('#').unwrap_or(input);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Value of a single ASCII hex digit. Callers have already validated it.
#[inline]
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

impl Color {
    /// Parse a hex color. See [`parse_hex`] for the accepted forms.
    pub fn from_hex(input: &str) -> TinctResult<Self> {
        parse_hex(input).map(Self::from_rgb8)
    }
}
