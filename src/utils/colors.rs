/// Label text color used on light or unrecognised label backgrounds.
pub const DARK_LABEL_TEXT: &str = "#111827";
/// Label text color used on dark label backgrounds.
pub const LIGHT_LABEL_TEXT: &str = "#ffffff";

/// Labels brighter than this get dark text.
pub const LUMINANCE_THRESHOLD: f32 = 0.6;

/// Parses the first three channels of a `#RRGGBB` (or longer, e.g.
/// `#RRGGBBAA`) hex color.
pub fn parse_hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    let digits = hex.get(0..6)?;

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();

    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Perceived brightness in `0.0..=1.0` from gamma-encoded sRGB channels.
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f32 {
    (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0
}

/// Picks a readable text color for a label painted with `background`.
///
/// Gradients and functional `rgb()`/`rgba()` colors are not measured and
/// always get dark text, as does anything that isn't a 6-digit hex color.
pub fn label_text_color(background: &str) -> &'static str {
    let lower = background.to_ascii_lowercase();

    if lower.contains("gradient") || lower.contains("rgb") {
        return DARK_LABEL_TEXT;
    }

    if !(lower.starts_with('#') && lower.len() >= 7) {
        return DARK_LABEL_TEXT;
    }

    match parse_hex_rgb(&lower) {
        Some((r, g, b)) if relative_luminance(r, g, b) > LUMINANCE_THRESHOLD => DARK_LABEL_TEXT,
        Some(_) => LIGHT_LABEL_TEXT,
        None => DARK_LABEL_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_rgb() {
        assert_eq!(parse_hex_rgb("#1D2B4D"), Some((0x1D, 0x2B, 0x4D)));
        assert_eq!(parse_hex_rgb("#e8c67bff"), Some((0xE8, 0xC6, 0x7B)));
        assert_eq!(parse_hex_rgb("#fff"), None);
        assert_eq!(parse_hex_rgb("#ZZZZZZ"), None);
        assert_eq!(parse_hex_rgb("#+F+F+F"), None);
        assert_eq!(parse_hex_rgb("1D2B4D"), None);
        assert_eq!(parse_hex_rgb("#ééé"), None);
    }

    #[test]
    fn test_relative_luminance_bounds() {
        assert_eq!(relative_luminance(0, 0, 0), 0.0);
        assert!((relative_luminance(255, 255, 255) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_dark_hex_gets_light_text() {
        let (r, g, b) = parse_hex_rgb("#1D2B4D").unwrap();
        assert!(relative_luminance(r, g, b) < 0.2);
        assert_eq!(label_text_color("#1D2B4D"), LIGHT_LABEL_TEXT);
    }

    #[test]
    fn test_light_hex_gets_dark_text() {
        let (r, g, b) = parse_hex_rgb("#E8C67B").unwrap();
        assert!(relative_luminance(r, g, b) > 0.75);
        assert_eq!(label_text_color("#E8C67B"), DARK_LABEL_TEXT);
    }

    #[test]
    fn test_gradient_gets_dark_text() {
        assert_eq!(
            label_text_color("linear-gradient(180deg,#fff9f1,#f59e0b)"),
            DARK_LABEL_TEXT
        );
        // Measured luminance is irrelevant for gradients.
        assert_eq!(
            label_text_color("linear-gradient(180deg,#000000,#111111)"),
            DARK_LABEL_TEXT
        );
        assert_eq!(label_text_color("RGBA(0, 0, 0, 1)"), DARK_LABEL_TEXT);
    }

    #[test]
    fn test_unrecognised_formats_get_dark_text() {
        assert_eq!(label_text_color("#ZZZZZZ"), DARK_LABEL_TEXT);
        assert_eq!(label_text_color("#000"), DARK_LABEL_TEXT);
        assert_eq!(label_text_color("navy"), DARK_LABEL_TEXT);
        assert_eq!(label_text_color("hsl(220, 40%, 20%)"), DARK_LABEL_TEXT);
        assert_eq!(label_text_color(""), DARK_LABEL_TEXT);
    }

    #[test]
    fn test_threshold_around_grey() {
        assert_eq!(label_text_color("#8F8F8F"), LIGHT_LABEL_TEXT);
        assert_eq!(label_text_color("#A0A0A0"), DARK_LABEL_TEXT);
    }
}
