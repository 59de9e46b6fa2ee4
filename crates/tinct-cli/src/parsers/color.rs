//! Target color parsing.

use tinct_core::Color;

/// Parse a `#rgb` / `#rrggbb` color argument.
///
/// Surrounding whitespace from shell quoting is trimmed here; the core parser
/// itself is strict.
pub fn parse_color(input: &str) -> Result<Color, String> {
    Color::from_hex(input.trim()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_accepts_short_and_long_forms() {
        assert_eq!(parse_color("#fff").unwrap().to_rgb8(), [255, 255, 255]);
        assert_eq!(parse_color("00a4d6").unwrap().to_rgb8(), [0, 164, 214]);
        assert_eq!(parse_color(" #00A4D6 ").unwrap().to_hex(), "#00a4d6");
    }

    #[test]
    fn test_parse_color_reports_input() {
        let err = parse_color("#12345").unwrap_err();
        assert!(err.contains("#12345"), "{}", err);
    }
}
