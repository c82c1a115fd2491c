//! Domain checks for every color model.
//!
//! Each conversion calls the matching check before computing anything, so a
//! failed check never yields a partial result. Ranges are half-open for hue
//! (`[0, 360)`) and closed everywhere else. NaN never passes.

use crate::error::ColorError;

const RGB_RANGE: &str = "an integer in [0, 255]";
const HUE_RANGE: &str = "a number in [0, 360)";
const PERCENT_RANGE: &str = "a number in [0, 100]";
const CMYK_RANGE: &str = "a number in [0, 1]";

/// Checks that all three RGB channels lie in `[0, 255]`.
pub fn validate_rgb(r: i64, g: i64, b: i64) -> Result<(), ColorError> {
    for (field, value) in [("red", r), ("green", g), ("blue", b)] {
        if !(0..=255).contains(&value) {
            return Err(ColorError::invalid(field, value, RGB_RANGE));
        }
    }
    Ok(())
}

/// Checks `0 <= h < 360`, `0 <= s <= 100` and `0 <= l <= 100`.
pub fn validate_hsl(h: f64, s: f64, l: f64) -> Result<(), ColorError> {
    check_hue(h)?;
    check_percent("saturation", s)?;
    check_percent("lightness", l)
}

/// Checks `0 <= h < 360`, `0 <= s <= 100` and `0 <= v <= 100`.
pub fn validate_hsv(h: f64, s: f64, v: f64) -> Result<(), ColorError> {
    check_hue(h)?;
    check_percent("saturation", s)?;
    check_percent("value", v)
}

/// Checks that all four CMYK components are numbers in `[0, 1]`.
pub fn validate_cmyk(c: f64, m: f64, y: f64, k: f64) -> Result<(), ColorError> {
    for (field, value) in [("cyan", c), ("magenta", m), ("yellow", y), ("black", k)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ColorError::invalid(field, value, CMYK_RANGE));
        }
    }
    Ok(())
}

/// Parses `#RRGGBB` or `RRGGBB` (any case) into its three bytes.
///
/// Leading `#` characters are stripped; what remains must be exactly six
/// ASCII hex digits. Signs and whitespace are rejected even though
/// `u8::from_str_radix` would accept a leading `+`.
pub fn parse_hex(hex: &str) -> Result<[u8; 3], ColorError> {
    let digits = hex.trim_start_matches('#');
    if digits.chars().count() != 6 {
        return Err(ColorError::invalid("hex", hex, "6 characters after '#'"));
    }
    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(ColorError::invalid(
            "hex",
            hex,
            "only hexadecimal digits 0-9 and A-F",
        ));
    }

    let mut bytes = [0u8; 3];
    for (i, byte) in bytes.iter_mut().enumerate() {
        let pair = &digits[i * 2..i * 2 + 2];
        *byte = u8::from_str_radix(pair, 16)
            .map_err(|_| ColorError::invalid("hex", hex, "only hexadecimal digits 0-9 and A-F"))?;
    }
    Ok(bytes)
}

fn check_hue(h: f64) -> Result<(), ColorError> {
    if (0.0..360.0).contains(&h) {
        Ok(())
    } else {
        Err(ColorError::invalid("hue", h, HUE_RANGE))
    }
}

fn check_percent(field: &'static str, value: f64) -> Result<(), ColorError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::invalid(field, value, PERCENT_RANGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- RGB --

    #[test]
    fn rgb_accepts_full_range() {
        assert!(validate_rgb(0, 0, 0).is_ok());
        assert!(validate_rgb(255, 255, 255).is_ok());
        assert!(validate_rgb(255, 87, 51).is_ok());
    }

    #[test]
    fn rgb_rejects_above_255_naming_the_channel() {
        let err = validate_rgb(256, 0, 0).unwrap_err();
        assert_eq!(err.field(), "red");
    }

    #[test]
    fn rgb_rejects_negative_naming_the_channel() {
        let err = validate_rgb(255, -1, 0).unwrap_err();
        assert_eq!(err.field(), "green");
        let err = validate_rgb(0, 0, -255).unwrap_err();
        assert_eq!(err.field(), "blue");
    }

    // -- HSL / HSV --

    #[test]
    fn hue_range_is_half_open() {
        assert!(validate_hsl(0.0, 50.0, 50.0).is_ok());
        assert!(validate_hsl(359.999, 50.0, 50.0).is_ok());
        assert_eq!(validate_hsl(360.0, 50.0, 50.0).unwrap_err().field(), "hue");
        assert_eq!(validate_hsv(360.0, 50.0, 50.0).unwrap_err().field(), "hue");
        assert_eq!(validate_hsv(-0.5, 50.0, 50.0).unwrap_err().field(), "hue");
    }

    #[test]
    fn percentages_are_closed_ranges() {
        assert!(validate_hsl(120.0, 0.0, 100.0).is_ok());
        assert!(validate_hsv(120.0, 100.0, 0.0).is_ok());
        assert_eq!(
            validate_hsl(120.0, 150.0, 50.0).unwrap_err().field(),
            "saturation"
        );
        assert_eq!(
            validate_hsl(120.0, 50.0, 100.5).unwrap_err().field(),
            "lightness"
        );
        assert_eq!(validate_hsv(120.0, 50.0, -1.0).unwrap_err().field(), "value");
    }

    #[test]
    fn nan_components_are_rejected() {
        assert!(validate_hsl(f64::NAN, 50.0, 50.0).is_err());
        assert!(validate_hsv(0.0, f64::NAN, 50.0).is_err());
        assert!(validate_cmyk(0.0, 0.0, f64::NAN, 0.0).is_err());
    }

    // -- CMYK --

    #[test]
    fn cmyk_accepts_unit_interval() {
        assert!(validate_cmyk(0.0, 0.0, 0.0, 1.0).is_ok());
        assert!(validate_cmyk(1.0, 1.0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn cmyk_rejects_out_of_range_naming_the_component() {
        assert_eq!(validate_cmyk(1.5, 0.0, 0.0, 0.0).unwrap_err().field(), "cyan");
        assert_eq!(
            validate_cmyk(0.0, -0.5, 0.0, 0.0).unwrap_err().field(),
            "magenta"
        );
        assert_eq!(
            validate_cmyk(0.0, 0.0, 0.0, f64::INFINITY).unwrap_err().field(),
            "black"
        );
    }

    // -- HEX --

    #[test]
    fn parse_hex_with_and_without_hash() {
        assert_eq!(parse_hex("#FF5733").unwrap(), [255, 87, 51]);
        assert_eq!(parse_hex("bada55").unwrap(), [186, 218, 85]);
    }

    #[test]
    fn parse_hex_rejects_wrong_length() {
        assert!(parse_hex("#FFF").is_err());
        assert!(parse_hex("#FFFFFFFFFF").is_err());
        assert!(parse_hex("").is_err());
        assert!(parse_hex("#").is_err());
    }

    #[test]
    fn parse_hex_rejects_non_hex_characters() {
        assert!(parse_hex("#ZZZZZZ").is_err());
        assert!(parse_hex("#+F0000").is_err());
        assert!(parse_hex("# F0000").is_err());
    }

    #[test]
    fn parse_hex_rejects_multibyte_input_without_panicking() {
        assert!(parse_hex("#ééé").is_err());
        assert!(parse_hex("FFFFé0").is_err());
    }
}
