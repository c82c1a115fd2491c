//! Text input parsing and the all-formats report.
//!
//! A front end collects a format name and a free-text value such as
//! `"255, 87, 51"` or `"#ff5733"`. [`parse_color`] turns that into the RGB
//! pivot, and [`ColorReport::from_rgb`] refreshes every other representation
//! from it in one step.

use std::fmt;
use std::str::FromStr;

use crate::color::{
    cmyk_to_rgb, hex_to_rgb, hsl_to_rgb, hsv_to_rgb, Cmyk, Hsl, Hsv, Rgb,
};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// The five supported color notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Rgb,
    Hex,
    Cmyk,
    Hsl,
    Hsv,
}

impl ColorFormat {
    /// All formats, in display order.
    pub const ALL: [ColorFormat; 5] = [
        ColorFormat::Rgb,
        ColorFormat::Hex,
        ColorFormat::Cmyk,
        ColorFormat::Hsl,
        ColorFormat::Hsv,
    ];

    /// Uppercase display name, e.g. `"CMYK"`.
    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Rgb => "RGB",
            ColorFormat::Hex => "HEX",
            ColorFormat::Cmyk => "CMYK",
            ColorFormat::Hsl => "HSL",
            ColorFormat::Hsv => "HSV",
        }
    }

    /// Short description of the text this format accepts.
    pub fn input_hint(self) -> &'static str {
        match self {
            ColorFormat::Rgb => "r, g, b (integers 0-255)",
            ColorFormat::Hex => "#RRGGBB",
            ColorFormat::Cmyk => "c, m, y, k (0-1)",
            ColorFormat::Hsl => "h, s, l (h 0-359, s/l 0-100)",
            ColorFormat::Hsv => "h, s, v (h 0-359, s/v 0-100)",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::unknown("format", s, "one of RGB, HEX, CMYK, HSL, HSV"))
    }
}

/// Parses free text in the given format and converts it to RGB.
///
/// HEX input goes straight to [`hex_to_rgb`]. The other formats are
/// comma-separated; RGB components must be integers, the rest may be
/// fractional. Component values are validated by the matching conversion.
pub fn parse_color(format: ColorFormat, input: &str) -> Result<Rgb, ColorError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ColorError::invalid("input", "\"\"", "a non-empty color value"));
    }

    match format {
        ColorFormat::Hex => hex_to_rgb(input),
        ColorFormat::Rgb => {
            let [r, g, b] = components::<i64, 3>(input, "three comma-separated integers")?;
            Rgb::new(r, g, b)
        }
        ColorFormat::Cmyk => {
            let [c, m, y, k] = components::<f64, 4>(input, "four comma-separated numbers")?;
            cmyk_to_rgb(c, m, y, k)
        }
        ColorFormat::Hsl => {
            let [h, s, l] = components::<f64, 3>(input, "three comma-separated numbers")?;
            hsl_to_rgb(h, s, l)
        }
        ColorFormat::Hsv => {
            let [h, s, v] = components::<f64, 3>(input, "three comma-separated numbers")?;
            hsv_to_rgb(h, s, v)
        }
    }
}

fn components<T: FromStr, const N: usize>(
    input: &str,
    expected: &'static str,
) -> Result<[T; N], ColorError> {
    let values: Vec<T> = input
        .split(',')
        .map(|part| part.trim().parse::<T>())
        .collect::<Result<_, _>>()
        .map_err(|_| ColorError::invalid("input", input, expected))?;
    values
        .try_into()
        .map_err(|_| ColorError::invalid("input", input, expected))
}

/// One color in every supported notation, all derived from the same RGB value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    pub rgb: Rgb,
    pub hex: String,
    pub cmyk: Cmyk,
    pub hsl: Hsl,
    pub hsv: Hsv,
}

impl ColorReport {
    /// Refreshes every representation from the RGB pivot.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            hex: rgb.to_hex(),
            cmyk: rgb.to_cmyk(),
            hsl: rgb.to_hsl(),
            hsv: rgb.to_hsv(),
        }
    }

    /// Parses `input` as `format` and builds the full report.
    pub fn parse(format: ColorFormat, input: &str) -> Result<Self, ColorError> {
        parse_color(format, input).map(Self::from_rgb)
    }

    /// Renders the representation for one format as display text.
    pub fn render(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Rgb => self.rgb.to_string(),
            ColorFormat::Hex => self.hex.clone(),
            ColorFormat::Cmyk => self.cmyk.to_string(),
            ColorFormat::Hsl => self.hsl.to_string(),
            ColorFormat::Hsv => self.hsv.to_string(),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.c, self.m, self.y, self.k)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.h, self.s, self.v)
    }
}
